// kem/src/ntru/ring.rs

//! Dense arithmetic in Z_q[x]/(x^N - 1) for a power-of-two q.

use alloc::vec::Vec;
use zeroize::Zeroize;

use crate::error::{validate, Result};

/// Newton iterations lifting an inverse mod 2 to mod 2^16 (2 -> 4 -> 16 -> 256 -> 65536)
const NEWTON_STEPS: usize = 4;

/// Schoolbook product `a * b` reduced modulo `q`; `q = 0` stands for 2^16
pub fn mult(a: &[u16], b: &[u16], q: u16) -> Result<Vec<u16>> {
    validate::length("NTRU ring element", b.len(), a.len())?;
    let n = a.len();
    let mask = q.wrapping_sub(1);
    let mut c = alloc::vec![0u16; n];

    for (i, &x) in a.iter().enumerate() {
        if x == 0 {
            continue;
        }
        for (k, &y) in b.iter().enumerate() {
            let j = if i + k >= n { i + k - n } else { i + k };
            c[j] = c[j].wrapping_add(x.wrapping_mul(y));
        }
    }
    c.iter_mut().for_each(|v| *v &= mask);
    Ok(c)
}

/// Inverse of `a` modulo (x^N - 1, q), or `None` if `a` is not invertible
///
/// The inverse modulo 2 comes from the almost-inverse algorithm; Newton
/// iteration `b = b * (2 - a * b)` then lifts it to the full modulus.
pub fn inverse(a: &[u16], q: u16) -> Result<Option<Vec<u16>>> {
    let n = a.len();
    validate::parameter(n > 1, "N", "ring degree out of range")?;
    validate::parameter(q.is_power_of_two(), "q", "modulus must be a power of two")?;

    let mut b = match inverse_mod2(a) {
        Some(b) => b,
        None => return Ok(None),
    };

    let mask = q.wrapping_sub(1);
    for _ in 0..NEWTON_STEPS {
        let mut t = mult(a, &b, 0)?;
        t.iter_mut().for_each(|v| *v = v.wrapping_neg());
        t[0] = t[0].wrapping_add(2);
        let next = mult(&b, &t, 0)?;
        t.zeroize();
        b.zeroize();
        b = next;
    }
    b.iter_mut().for_each(|v| *v &= mask);

    // a * b must be exactly one
    let mut check = mult(a, &b, q)?;
    let is_one = check[0] == 1 && check[1..].iter().all(|&v| v == 0);
    check.zeroize();
    if !is_one {
        b.zeroize();
        return Ok(None);
    }
    Ok(Some(b))
}

/// Almost-inverse algorithm over GF(2)
///
/// `f` and `g` are genuine polynomials of degree at most N, while `b` and `c`
/// are kept reduced modulo x^N - 1 so that `c * x` is a rotation.
fn inverse_mod2(a: &[u16]) -> Option<Vec<u16>> {
    let n = a.len();
    let mut f: Vec<u8> = a.iter().map(|&x| (x & 1) as u8).collect();
    f.push(0);
    let mut g = alloc::vec![0u8; n + 1];
    g[0] = 1;
    g[n] = 1;
    let mut b = alloc::vec![0u8; n];
    b[0] = 1;
    let mut c = alloc::vec![0u8; n];

    let mut deg_f = degree(&f);
    let mut deg_g = n;
    let mut k = 0usize;

    let result = loop {
        let mut df = match deg_f {
            Some(d) => d,
            None => break None,
        };
        while f[0] == 0 {
            f.rotate_left(1);
            c.rotate_right(1);
            df -= 1;
            k += 1;
        }
        if df == 0 {
            break Some(k);
        }
        if df < deg_g {
            core::mem::swap(&mut f, &mut g);
            core::mem::swap(&mut b, &mut c);
            deg_g = df;
        }
        f.iter_mut().zip(g.iter()).for_each(|(x, y)| *x ^= y);
        b.iter_mut().zip(c.iter()).for_each(|(x, y)| *x ^= y);
        deg_f = degree(&f);
    };

    let inverse = result.map(|k| {
        let shift = k % n;
        let mut out = alloc::vec![0u16; n];
        for (i, &bit) in b.iter().enumerate() {
            out[(i + n - shift) % n] = u16::from(bit);
        }
        out
    });

    f.zeroize();
    g.zeroize();
    b.zeroize();
    c.zeroize();
    inverse
}

fn degree(p: &[u8]) -> Option<usize> {
    p.iter().rposition(|&x| x != 0)
}
