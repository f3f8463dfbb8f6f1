#![allow(dead_code)]
#![allow(unused_imports)]

mod math;
mod common;
mod config;
mod spherical;
mod math_random;

use log::{info,error};
use std::fs::File;
use std::io::{Write,BufWriter};
use math::*;
use pico_args::Arguments;

use math_random::Random;
use config::{Config,Loadable};

use common::*;

fn sampler_for(seed:Option<u64>)->Random {
    match seed {
	Some(seed) => Random::with_seed(seed),
	None => Random::new()
    }
}

fn main()->Res<()> {
    simple_logger::SimpleLogger::new().init()?;

    let res = main0();
    if let Err(e) = &res {
	error!("{}",e);
    }

    res
}

fn main0()->Res<()> {
    let mut args = Arguments::from_env();

    let config_fn : String = args.value_from_str("--config")?;
    info!("Loading configuration from {}",config_fn);
    let config = Config::load(&config_fn)?;

    let mut rng = sampler_for(config.seed);

    info!("Creating output directory {}",config.output);
    std::fs::create_dir_all(&config.output)?;

    info!("Sampling {} points on the unit sphere",config.count);
    let xyz = rng.sphere(config.count)?;

    let mean_z = xyz.column(2).mean().unwrap_or(0.0);
    info!("Mean z coordinate: {:+.6e}",mean_z);

    {
	let points_path = format!("{}/points.txt",config.output);
	info!("Writing sphere points to {}",points_path);
	let fd = File::create(points_path)?;
	let mut fd = BufWriter::new(fd);
	for i in 0..config.count {
	    writeln!(fd,
		     "{:+.12e} {:+.12e} {:+.12e}",
		     xyz[[i,0]],
		     xyz[[i,1]],
		     xyz[[i,2]])?;
	}
    }

    if let Some(job) = &config.uniform {
	info!("Sampling {} scalars uniform on [{},{})",
	      job.count,job.lo,job.hi);
	let v = rng.uniform(job.count,job.lo,job.hi)?;
	let uniform_path = format!("{}/uniform.txt",config.output);
	info!("Writing scalars to {}",uniform_path);
	let fd = File::create(uniform_path)?;
	let mut fd = BufWriter::new(fd);
	for x in v.iter() {
	    writeln!(fd,"{:+.12e}",x)?;
	}
    }

    Ok(())
}
