use serde::{Serialize,Deserialize};
use std::{
    fs::File,
    path::Path
};

use crate::{
    common::*,
    math::*
};

#[derive(Clone,Serialize,Deserialize,Debug)]
pub struct UniformJob {
    pub count:usize,
    pub lo:Real,
    pub hi:Real
}

#[derive(Clone,Serialize,Deserialize,Debug)]
pub struct Config {
    pub count:usize,
    pub seed:Option<u64>,
    pub output:String,
    pub uniform:Option<UniformJob>
}

pub trait Loadable {
    fn load<P:AsRef<Path>>(path:P)->Res<Self>
    where Self:Sized,for<'a> Self:Deserialize<'a> {
	let fd = File::open(path)?;
	let this : Self = ron::de::from_reader(fd)?;
	Ok(this)
    }
}

impl Loadable for Config { }
