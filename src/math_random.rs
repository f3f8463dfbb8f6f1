use ndarray_rand::rand as rand;
use ndarray_rand::rand_distr as rand_distr;
use ndarray_rand::RandomExt;
use rand_distr::Uniform;
use rand::{SeedableRng,Rng,rngs::StdRng};
use crate::common::*;
use crate::math::*;
use crate::spherical::sphere_to_cart;

/// Keeps cos(theta) away from the exact poles, where acos loses precision.
/// Historical value, do not re-derive.
pub const POLE_MARGIN:Real = 1.0e-6;

pub struct Random {
    rng:StdRng,
    dist:Uniform<Real>
}

impl Random {
    pub fn new()->Self {
        let rng = SeedableRng::from_entropy();
        let dist : Uniform<Real> = Uniform::new(0.0,1.0);
        Random{ rng, dist }
    }

    /// Deterministic sampler for reproducible runs and tests.
    pub fn with_seed(seed:u64)->Self {
        let rng = StdRng::seed_from_u64(seed);
        let dist : Uniform<Real> = Uniform::new(0.0,1.0);
        Random{ rng, dist }
    }

    pub fn number(&mut self,x0:Real,x1:Real)->Real {
        x0+(x1-x0)*self.rng.sample(self.dist)
    }

    /// n independent draws from [lo,hi).  The interval must be non-degenerate.
    pub fn uniform(&mut self,n:usize,lo:Real,hi:Real)->Res<AR1> {
	if !(lo < hi) {
	    return Err(error(&format!("Invalid interval [{},{})",lo,hi)));
	}
	Ok(AR1::random_using(n,Uniform::new(lo,hi),&mut self.rng))
    }

    /// n points uniform over the surface of the unit sphere, one per row.
    ///
    /// Inverse-transform sampling: cos(theta) is drawn uniformly so that the
    /// sin(theta) surface-area element is compensated exactly; drawing theta
    /// uniformly instead would pile points up at the poles.
    pub fn sphere(&mut self,n:usize)->Res<AR2> {
	let u = self.uniform(n,POLE_MARGIN,1.0 - POLE_MARGIN)?;
	let t = u.mapv(|u| acos(2.0*u - 1.0));
	let phi = self.uniform(n,0.0,2.0*PI)?;
	Ok(sphere_to_cart(&t,&phi))
    }
}
