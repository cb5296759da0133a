//! Adler-32 test program
//!
//! This application is for testing purposes only and is not intended for practical use.
//!
//! ```text
//! adlertest [SIZE] [TIMES]
//! ```

use adler32::{Backend, parallel};
use std::{env, path::Path, process, time::Instant};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = env::args().skip(1);
    let src_size = parse_arg(args.next(), 0x100_0000);
    let times = parse_arg(args.next(), 20);

    let time0 = Instant::now();
    while time0.elapsed().as_secs_f64() < 1.0 {
        stabilize();
    }

    let input = random_bytes(src_size);
    let expected = Backend::Scalar.update(1, &input);
    tracing::info!(size = src_size, times, detected = %Backend::detect(), "start");

    for backend in Backend::ALL {
        if !backend.is_supported() {
            println!("{:>8}: not supported", backend);
            continue;
        }
        let time0 = Instant::now();
        let mut adler = 0;
        for _ in 0..times {
            adler = backend.update(1, &input);
        }
        report(backend.name(), adler, expected, src_size, times, time0);
    }

    let time0 = Instant::now();
    let mut adler = 0;
    for _ in 0..times {
        adler = parallel::par_checksum(&input, 0);
    }
    report("parallel", adler, expected, src_size, times, time0);
}

fn report(name: &str, adler: u32, expected: u32, size: usize, times: usize, time0: Instant) {
    let elapsed = time0.elapsed().as_secs_f64();
    println!(
        "{:>8}: {:08x} {:.03}s {:.02} GiB/s",
        name,
        adler,
        elapsed,
        (size * times) as f64 / elapsed / (1u64 << 30) as f64,
    );
    if adler != expected {
        eprintln!("MISMATCH: {} {:08x} != {:08x}", name, adler, expected);
        process::exit(1);
    }
}

fn parse_arg(arg: Option<String>, default: usize) -> usize {
    match arg {
        Some(arg) => arg.parse().unwrap_or_else(|_| usage()),
        None => default,
    }
}

fn usage() -> ! {
    let mut args = env::args_os();
    let arg = args.next().unwrap_or_default();
    let path = Path::new(&arg);
    let lpc = path.file_name().unwrap_or_default();
    eprintln!("{} [SIZE] [TIMES]", lpc.to_string_lossy());
    process::exit(1);
}

fn random_bytes(limit: usize) -> Vec<u8> {
    use rand::RngCore;
    let mut rng = rand::rng();
    let mut v = vec![0; limit];
    rng.fill_bytes(&mut v);
    v
}

fn stabilize() {
    use rand::RngCore;
    let mut rng = rand::rng();
    let len = 0x1000 + (rng.next_u32() as usize & 0xfffff);
    let v = random_bytes(len);
    let _ = adler32::checksum(&v);
}
