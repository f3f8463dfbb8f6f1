#![allow(dead_code)]
#![allow(unused_macros)]
#![macro_use]

pub use ndarray::{array,Array1,Array2,ArrayView1,ArrayView2};
pub use serde::{Serialize,Deserialize};
use std::fmt::{Display,Formatter};

pub fn abs<T:num::traits::real::Real>(x:T)->T { x.abs() }
pub fn cos<T:num::traits::real::Real>(x:T)->T { x.cos() }
pub fn sin<T:num::traits::real::Real>(x:T)->T { x.sin() }
pub fn acos<T:num::traits::real::Real>(x:T)->T { x.acos() }
pub fn atan2<T:num::traits::real::Real>(y:T,x:T)->T { y.atan2(x) }
pub fn sqrt<T:num::traits::real::Real>(x:T)->T { x.sqrt() }
pub fn min<T:num::traits::real::Real>(x:T,y:T)->T { x.min(y) }
pub fn max<T:num::traits::real::Real>(x:T,y:T)->T { x.max(y) }
pub fn sq<T:num::traits::real::Real>(x:T)->T { x*x }
pub const PI:f64 = std::f64::consts::PI;

pub type Real = f64;
pub type AR1 = Array1::<Real>;
pub type AR2 = Array2::<Real>;

pub fn close_enough(x:f64,y:f64,tol:f64)->bool {
    let ax = abs(x);
    let ay = abs(y);
    let a = if ax>ay { ax } else { ay };
    let e = abs(x-y);
    let e = if a > tol { e/a } else { e };
    e < tol
}

macro_rules! assert_close {
    ($x:expr,$y:expr,$tol:expr) => {
        if !close_enough($x,$y,$tol) {
            println!("Tolerance failure: |{:.6e} - {:.6e}| @ {:.6e}",$x,$y,$tol);
            panic!("Tolerance failure");
        }
    }
}

pub trait Realable {
    fn real(&self)->Real;
}

impl Realable for usize {
    fn real(&self)->Real {
        *self as Real
    }
}

pub fn real<T:Realable>(x:T)->Real {
    x.real()
}

use std::ops::{Index,IndexMut};

#[derive(Clone,Copy,Debug,Serialize,Deserialize)]
pub struct Real3(pub [Real;3]);

pub fn r3(x:Real,y:Real,z:Real)->Real3 { Real3::make([x,y,z]) }

impl Display for Real3 {
    fn fmt(&self,fmt:&mut Formatter)->Result<(),std::fmt::Error> {
	write!(fmt,"[{:+8.5e},{:+8.5e},{:+8.5e}]",
		self[0],
		self[1],
		self[2])
    }
}

impl Index<usize> for Real3 {
    type Output = Real;
    fn index(&self, i:usize) -> &Self::Output {
        let Real3(u) = self;
        &u[i]
    }
}

impl IndexMut<usize> for Real3 {
    fn index_mut(&mut self, i:usize) -> &mut Self::Output {
        let Real3(u) = self;
        &mut u[i]
    }
}

impl Real3 {
    pub fn zero()->Self { Real3([0.0;3]) }
    pub fn make(u:[Real;3])->Self { Real3(u) }
    pub fn dot(self,Real3([x2,y2,z2]):Self)->Real {
        let Real3([x1,y1,z1]) = self;
        x1*x2+y1*y2+z1*z2
    }
    pub fn norm2sq(self)->Real { self.dot(self) }
    pub fn norm2(self)->Real { sqrt(self.norm2sq()) }
}

#[cfg(test)]
#[test]
fn test_vector() {
    let x = Real3::make([3.0,0.0,4.0]);
    let mut y = Real3::zero();
    y[0] = 1.0;
    assert_close!(x.norm2(),5.0,1e-12);
    assert_close!(x.dot(y),3.0,1e-12);
}
