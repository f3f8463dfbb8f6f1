mod math;
mod common;
mod spherical;
mod math_random;

use pico_args::Arguments;

use common::*;
use math_random::Random;

fn main()->Res<()> {
    let mut args = Arguments::from_env();
    let n : usize = args.value_from_str("--count")?;
    let seed : Option<u64> = args.opt_value_from_str("--seed")?;

    let mut rng = match seed {
	Some(seed) => Random::with_seed(seed),
	None => Random::new()
    };

    let xyz = rng.sphere(n)?;
    for i in 0..n {
	println!("{:+.12e} {:+.12e} {:+.12e}",
		 xyz[[i,0]],
		 xyz[[i,1]],
		 xyz[[i,2]]);
    }
    Ok(())
}
