//! Portable accumulator, the reference every other backend must match

use super::{BASE, NMAX};

/// Bytes summed between two reductions inside a block
pub const GROUP: usize = 16;

#[inline]
pub fn split(adler: u32) -> (u32, u32) {
    (adler & 0xffff, (adler >> 16) & 0xffff)
}

#[inline]
pub fn pack(sum1: u32, sum2: u32) -> u32 {
    sum1 | (sum2 << 16)
}

pub fn update(adler: u32, data: &[u8]) -> u32 {
    let (mut sum1, mut sum2) = split(adler);

    match data.len() {
        0 => return adler,
        1 => {
            // in case of a byte at a time, keep it fast
            sum1 += data[0] as u32;
            if sum1 >= BASE {
                sum1 -= BASE;
            }
            sum2 += sum1;
            if sum2 >= BASE {
                sum2 -= BASE;
            }
            return pack(sum1, sum2);
        }
        len if len < GROUP => {
            for &byte in data {
                sum1 += byte as u32;
                sum2 += sum1;
            }
            if sum1 >= BASE {
                sum1 -= BASE;
            }
            sum2 %= BASE;
            return pack(sum1, sum2);
        }
        _ => {}
    }

    let mut blocks = data.chunks_exact(NMAX);
    for block in &mut blocks {
        do_groups(&mut sum1, &mut sum2, block);
        sum1 %= BASE;
        sum2 %= BASE;
    }

    let tail = blocks.remainder();
    if !tail.is_empty() {
        let rest = do_groups(&mut sum1, &mut sum2, tail);
        for &byte in rest {
            sum1 += byte as u32;
            sum2 += sum1;
        }
        sum1 %= BASE;
        sum2 %= BASE;
    }

    pack(sum1, sum2)
}

/// Accumulates every full group of `data` without reduction and returns the leftover bytes.
#[inline]
fn do_groups<'a>(sum1: &mut u32, sum2: &mut u32, data: &'a [u8]) -> &'a [u8] {
    let mut groups = data.chunks_exact(GROUP);
    for group in &mut groups {
        do16(sum1, sum2, group);
    }
    groups.remainder()
}

#[inline(always)]
fn do16(sum1: &mut u32, sum2: &mut u32, group: &[u8]) {
    let (mut a, mut b) = (*sum1, *sum2);
    for &byte in &group[..GROUP] {
        a += byte as u32;
        b += a;
    }
    *sum1 = a;
    *sum2 = b;
}
