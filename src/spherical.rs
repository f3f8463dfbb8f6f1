use crate::math::*;

/// Unit-radius point from polar angle `t` (from +z) and azimuth `phi`.
pub fn sphere_point(t:Real,phi:Real)->Real3 {
    let st = sin(t);
    r3(st*cos(phi),st*sin(phi),cos(t))
}

/// Batch conversion of parallel angle arrays to an n x 3 Cartesian array.
pub fn sphere_to_cart(t:&AR1,phi:&AR1)->AR2 {
    let n = t.len();
    let mut xyz = AR2::zeros((n,3));
    for i in 0..n {
	let p = sphere_point(t[i],phi[i]);
	for j in 0..3 {
	    xyz[[i,j]] = p[j];
	}
    }
    xyz
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_axis_points() {
	let p = sphere_point(0.0,0.0);
	assert_close!(p[2],1.0,1e-12);
	let p = sphere_point(PI/2.0,0.0);
	assert_close!(p[0],1.0,1e-12);
	let p = sphere_point(PI/2.0,PI/2.0);
	assert_close!(p[1],1.0,1e-12);
	let p = sphere_point(PI,0.0);
	assert_close!(p[2],-1.0,1e-12);
    }

    #[test]
    fn test_batch_matches_scalar() {
	let t = array![0.3,1.1,2.9];
	let phi = array![0.0,2.0,5.5];
	let xyz = sphere_to_cart(&t,&phi);
	assert_eq!(xyz.dim(),(3,3));
	for i in 0..3 {
	    let p = sphere_point(t[i],phi[i]);
	    for j in 0..3 {
		assert_close!(xyz[[i,j]],p[j],1e-12);
	    }
	    assert_close!(p.norm2(),1.0,1e-12);
	}
    }
}
