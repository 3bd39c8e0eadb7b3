// kem/src/ntru/poly.rs

//! Sparse trinary polynomials in Z_q[x]/(x^N - 1).
//!
//! A polynomial is stored as lists of the positions of its +1 and -1
//! coefficients. Product-form polynomials hold three such factors and stand
//! for F = F1*F2 + F3. Multiplication by a dense ring element then costs one
//! rotated addition or subtraction of the operand per stored index.

use alloc::vec::Vec;
use zeroize::Zeroize;

use algorithms::xof::{BitSpender, XofType};

use crate::error::{validate, Error, Result};

/// Upper bound on index candidates drawn while sampling one polynomial
pub const MAX_INDEX_DRAWS: usize = 1 << 16;

/// Number of +1 and -1 positions of one sparse factor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Factor {
    plus: usize,
    minus: usize,
}

impl Factor {
    fn len(&self) -> usize {
        self.plus + self.minus
    }
}

/// A sparse trinary polynomial, single or in product form
pub struct NtruPoly {
    n: usize,
    q: u32,
    indices: Vec<u16>,
    factors: Vec<Factor>,
}

fn split_counts(count_plus: u32, count_minus: u32, is_product_form: bool) -> Vec<Factor> {
    if is_product_form {
        (0..3)
            .map(|k| Factor {
                plus: ((count_plus >> (8 * k)) & 0xff) as usize,
                minus: ((count_minus >> (8 * k)) & 0xff) as usize,
            })
            .collect()
    } else {
        alloc::vec![Factor {
            plus: count_plus as usize,
            minus: count_minus as usize,
        }]
    }
}

/// True if no position occurs twice among the +1 and -1 indices of a factor
fn distinct_per_factor(indices: &[u16], factors: &[Factor], n: usize) -> bool {
    let mut used = alloc::vec![false; n];
    let mut rest = indices;
    let mut distinct = true;
    for factor in factors {
        let (current, tail) = rest.split_at(factor.len());
        used.iter_mut().for_each(|u| *u = false);
        for &i in current {
            let i = usize::from(i);
            distinct &= !used[i];
            used[i] = true;
        }
        rest = tail;
    }
    used.zeroize();
    distinct
}

fn check_ring(n: usize, q: u32) -> Result<()> {
    validate::parameter(n > 1 && n <= usize::from(u16::MAX), "N", "ring degree out of range")?;
    validate::parameter(
        q.is_power_of_two() && q >= 2 && q <= 1 << 16,
        "q",
        "modulus must be a power of two no larger than 2^16",
    )?;
    Ok(())
}

impl NtruPoly {
    /// Samples a sparse polynomial from an XOF keyed with `seed`
    ///
    /// Index candidates are `c_bits`-wide integers read from the XOF output;
    /// a candidate `v` is accepted when `v < N * floor(2^c_bits / N)` and
    /// `v mod N` was not yet used by the current factor. For product form
    /// the counts carry one byte per factor.
    #[allow(clippy::too_many_arguments)]
    pub fn from_seed(
        xof: XofType,
        seed: &[u8],
        c_bits: u8,
        n: u16,
        q: u16,
        count_plus: u32,
        count_minus: u32,
        is_product_form: bool,
    ) -> Result<Self> {
        let n = usize::from(n);
        check_ring(n, u32::from(q))?;
        validate::parameter(
            c_bits > 0 && u32::from(c_bits) <= 16 && (1usize << c_bits) >= n,
            "c_bits",
            "index candidates must be able to cover the ring degree",
        )?;

        let factors = split_counts(count_plus, count_minus, is_product_form);
        let total: usize = factors.iter().map(Factor::len).sum();
        validate::parameter(
            factors.iter().all(|f| f.len() <= n),
            "indices",
            "more indices requested than ring positions",
        )?;

        let mut spender = BitSpender::new(xof, seed)?;
        let limit = (n * ((1usize << c_bits) / n)) as u32;
        let mut indices = Vec::with_capacity(total);
        let mut used = alloc::vec![false; n];
        let mut draws = 0usize;

        for factor in &factors {
            used.iter_mut().for_each(|u| *u = false);
            let mut taken = 0;
            while taken < factor.len() {
                if draws == MAX_INDEX_DRAWS {
                    used.zeroize();
                    indices.zeroize();
                    return Err(Error::KeyGeneration {
                        algorithm: "NTRU",
                        details: "index sampling did not terminate",
                    });
                }
                draws += 1;

                let candidate = spender.get(u32::from(c_bits))?;
                if candidate >= limit {
                    continue;
                }
                let index = (candidate as usize) % n;
                if used[index] {
                    continue;
                }
                used[index] = true;
                indices.push(index as u16);
                taken += 1;
            }
        }
        used.zeroize();

        Ok(Self {
            n,
            q: u32::from(q),
            indices,
            factors,
        })
    }

    /// Builds a polynomial from explicit index data
    ///
    /// `indices` lists, factor by factor, the +1 positions followed by the -1
    /// positions.
    pub fn from_data(
        indices: &[u16],
        n: u16,
        q: u16,
        count_plus: u32,
        count_minus: u32,
        is_product_form: bool,
    ) -> Result<Self> {
        let n = usize::from(n);
        check_ring(n, u32::from(q))?;

        let factors = split_counts(count_plus, count_minus, is_product_form);
        let total: usize = factors.iter().map(Factor::len).sum();
        validate::length("NTRU polynomial indices", indices.len(), total)?;
        validate::parameter(
            indices.iter().all(|&i| usize::from(i) < n),
            "indices",
            "index outside the ring",
        )?;
        validate::parameter(
            distinct_per_factor(indices, &factors, n),
            "indices",
            "index repeated within a factor",
        )?;

        Ok(Self {
            n,
            q: u32::from(q),
            indices: indices.to_vec(),
            factors,
        })
    }

    /// Total number of stored indices
    pub fn size(&self) -> usize {
        self.indices.len()
    }

    /// All indices, factor by factor with +1 positions before -1 positions
    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    /// Ring degree
    pub fn degree(&self) -> usize {
        self.n
    }

    /// True for a product-form polynomial
    pub fn is_product_form(&self) -> bool {
        self.factors.len() == 3
    }

    /// Computes `a * self` in Z_q[x]/(x^N - 1)
    pub fn ring_mult(&self, a: &[u16]) -> Result<Vec<u16>> {
        validate::length("NTRU ring element", a.len(), self.n)?;
        Ok(self.mult_unchecked(a))
    }

    /// The polynomial's own coefficients reduced into [0, q)
    pub fn to_dense(&self) -> Vec<u16> {
        let mut one = alloc::vec![0u16; self.n];
        one[0] = 1;
        self.mult_unchecked(&one)
    }

    /// `a * self` for an operand already known to have length N
    fn mult_unchecked(&self, a: &[u16]) -> Vec<u16> {
        let mask = (self.q - 1) as u16;

        let mut c = if self.is_product_form() {
            let (f1, rest) = self.indices.split_at(self.factors[0].len());
            let (f2, f3) = rest.split_at(self.factors[1].len());

            let mut t = self.mult_factor(a, f1, self.factors[0]);
            let t2 = self.mult_factor(&t, f2, self.factors[1]);
            t.zeroize();
            let mut u = self.mult_factor(a, f3, self.factors[2]);
            let sum: Vec<u16> = t2.iter().zip(u.iter()).map(|(x, y)| x.wrapping_add(*y)).collect();
            u.zeroize();
            sum
        } else {
            self.mult_factor(a, &self.indices, self.factors[0])
        };

        c.iter_mut().for_each(|x| *x &= mask);
        c
    }

    /// Cyclic convolution of `a` with one sparse factor, modulo 2^16
    fn mult_factor(&self, a: &[u16], indices: &[u16], factor: Factor) -> Vec<u16> {
        let n = self.n;
        let mut c = alloc::vec![0u16; n];
        let (plus, minus) = indices.split_at(factor.plus);

        for &i in plus {
            let i = usize::from(i);
            for (k, &x) in a.iter().enumerate() {
                let j = if k + i >= n { k + i - n } else { k + i };
                c[j] = c[j].wrapping_add(x);
            }
        }
        for &i in minus {
            let i = usize::from(i);
            for (k, &x) in a.iter().enumerate() {
                let j = if k + i >= n { k + i - n } else { k + i };
                c[j] = c[j].wrapping_sub(x);
            }
        }
        c
    }
}

impl Drop for NtruPoly {
    fn drop(&mut self) {
        self.indices.zeroize();
    }
}

impl core::fmt::Debug for NtruPoly {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NtruPoly")
            .field("n", &self.n)
            .field("q", &self.q)
            .field("size", &self.indices.len())
            .field("product_form", &self.is_product_form())
            .finish()
    }
}
