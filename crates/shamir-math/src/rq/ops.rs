//! Implementation of operations over polynomials.

use super::Poly;
use itertools::izip;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

impl AddAssign<&Poly> for Poly {
    fn add_assign(&mut self, p: &Poly) {
        assert_eq!(self.ctx, p.ctx, "Incompatible contexts");
        self.ctx.q.add_vec(&mut self.coefficients, &p.coefficients)
    }
}

impl Add<&Poly> for &Poly {
    type Output = Poly;
    fn add(self, p: &Poly) -> Poly {
        let mut q = self.clone();
        q += p;
        q
    }
}

impl SubAssign<&Poly> for Poly {
    fn sub_assign(&mut self, p: &Poly) {
        assert_eq!(self.ctx, p.ctx, "Incompatible contexts");
        izip!(self.coefficients.iter_mut(), p.coefficients.iter())
            .for_each(|(a, b)| *a = self.ctx.q.sub(*a, *b));
    }
}

impl Sub<&Poly> for &Poly {
    type Output = Poly;
    fn sub(self, p: &Poly) -> Poly {
        let mut q = self.clone();
        q -= p;
        q
    }
}

impl Neg for &Poly {
    type Output = Poly;

    fn neg(self) -> Poly {
        let mut out = self.clone();
        out.coefficients
            .iter_mut()
            .for_each(|a| *a = self.ctx.q.neg(*a));
        out
    }
}
