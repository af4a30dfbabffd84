//! Loan calculation functions: emi

use crate::helpers::*;
use reckon_plugin::prelude::*;
use std::collections::HashMap;

// ============ EMI (Equated Monthly Installment) ============

pub struct EmiFn;

static EMI_ARGS: [ArgMeta; 3] = [
    ArgMeta {
        name: "principal",
        typ: "Number",
        description: "Loan amount",
        optional: false,
        default: None,
    },
    ArgMeta {
        name: "annual_rate",
        typ: "Number",
        description: "Annual interest rate as a percentage (e.g. 7.5)",
        optional: false,
        default: None,
    },
    ArgMeta {
        name: "months",
        typ: "Number",
        description: "Loan tenure in months",
        optional: false,
        default: None,
    },
];

static EMI_EXAMPLES: [&str; 2] = [
    "emi(250000, 7.5, 240) → {emi: 2014.06, ...}",
    "emi(10000, 0, 10) → {emi: 1000, total_interest: 0, ...}",
];

static EMI_RELATED: [&str; 2] = ["compound_interest", "simple_interest"];

impl FunctionPlugin for EmiFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "emi",
            description: "Equated monthly installment for a loan",
            usage: "emi(principal, annual_rate, months)",
            args: &EMI_ARGS,
            returns: "Object",
            examples: &EMI_EXAMPLES,
            category: "finance/loans",
            related: &EMI_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if args.len() < 3 {
            return Value::Error(ReckonError::arg_count("emi", 3, args.len()));
        }

        let principal = match extract_number(&args[0], "emi", "principal") {
            Ok(n) => n,
            Err(e) => return Value::Error(e),
        };
        let annual_rate = match extract_number(&args[1], "emi", "annual_rate") {
            Ok(n) => n,
            Err(e) => return Value::Error(e),
        };
        let months = match extract_number(&args[2], "emi", "months") {
            Ok(n) => n,
            Err(e) => return Value::Error(e),
        };

        match calculate_emi(principal, annual_rate, months) {
            Ok((emi, total_payment, total_interest)) => {
                let mut result = HashMap::new();
                result.insert("emi".to_string(), Value::Number(emi));
                result.insert("total_payment".to_string(), Value::Number(total_payment));
                result.insert("total_interest".to_string(), Value::Number(total_interest));
                Value::Object(result)
            }
            Err(e) => Value::Error(e),
        }
    }
}

fn calculate_emi(
    principal: f64,
    annual_rate: f64,
    months: f64,
) -> Result<(f64, f64, f64), ReckonError> {
    validate_non_negative(principal, "emi", "principal")?;
    validate_non_negative(annual_rate, "emi", "annual_rate")?;
    validate_positive(months, "emi", "months")?;
    if months.fract() != 0.0 {
        return Err(ReckonError::domain_error(
            "emi: months must be a whole number",
        ));
    }

    let n = months;
    let monthly_rate = annual_rate / 12.0 / 100.0;

    let emi = if monthly_rate == 0.0 {
        principal / n
    } else {
        let factor = (1.0 + monthly_rate).powf(n);
        principal * monthly_rate * factor / (factor - 1.0)
    };

    let total_payment = emi * n;
    let total_interest = total_payment - principal;
    Ok((emi, total_payment, total_interest))
}
