use calculator::{add, divide, is_even, is_prime, multiply, subtract, CalculatorResult};
use tracing_subscriber::EnvFilter;

fn main() -> CalculatorResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("add(2, 3) = {}", add(2, 3));
    println!("subtract(3, 5) = {}", subtract(3, 5));
    println!("multiply(-2, 5) = {}", multiply(-2, 5));
    println!("divide(5, 2) = {}", divide(5, 2)?);

    // RUST_LOG=debug shows the rejected division
    if let Err(err) = divide(10, 0) {
        println!("divide(10, 0) failed: {err}");
    }

    for n in [-4, 0, 2, 9, 11] {
        println!("{n}: even = {}, prime = {}", is_even(n), is_prime(n));
    }

    Ok(())
}
