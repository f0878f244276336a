// ============================================================================
// Basic Usage Example
// ============================================================================

use float_calculator::prelude::*;
use std::sync::Arc;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Float Calculator Example ===\n");

    let calc = create_from_config(CalculatorConfig::reference(), Arc::new(LoggingCallObserver))
        .expect("reference configuration is valid");

    println!("Created calculator at {} decimals\n", calc.config().default_decimals);

    // Run every operation on its sample inputs, grouped by category
    for category in Category::ALL {
        println!("--- {} ---", category);
        for op in category.operations() {
            let inputs: Vec<&str> = op.inputs().iter().map(|input| input.placeholder).collect();
            let shown = op
                .inputs()
                .iter()
                .map(|input| format!("{} ({})={}", input.name, input.kind.name(), input.placeholder))
                .collect::<Vec<_>>()
                .join(", ");

            match calc.call_text(op, &inputs) {
                Ok(output) => println!("  {}({}) = {}", op, shown, output),
                Err(err) => println!("  {}({}) failed: {}", op, shown, err),
            }
        }
        println!();
    }

    // Typed values carry their own scale
    println!("=== Typed Values ===");
    let price = ScaledInteger::parse("1234.5678", 4).expect("valid decimal");
    let rate = ScaledInteger::parse("0.035", 18).expect("valid decimal");

    match price.checked_mul(&rate) {
        Ok(product) => println!("  {} * {} = {}", price, rate, product),
        Err(err) => println!("  multiply failed: {}", err),
    }
    match price.round_to(2) {
        Ok(rounded) => {
            println!("  round({}, 2) = {}", price, rounded);
            let (mantissa, decimals) = rounded.into_parts();
            println!("  raw parts: mantissa={}, decimals={}", mantissa, decimals);
        }
        Err(err) => println!("  round failed: {}", err),
    }

    // Errors surface verbatim
    println!("\n=== Errors ===");
    for (op, inputs) in [
        (Operation::Divide, ["1", "0", "18"].as_slice()),
        (Operation::NaturalLog, ["-1", "18"].as_slice()),
        (Operation::Exponential, ["200000000000000000000"].as_slice()),
    ] {
        match calc.call_text(op, inputs) {
            Ok(output) => println!("  {} = {}", op, output),
            Err(err) => println!("  {} failed: {}", op, err),
        }
    }

    match calc.call_by_name("sqrt", &[]) {
        Ok(output) => println!("  sqrt = {}", output),
        Err(err) => println!("  sqrt failed: {}", err),
    }
}
