//! Interest calculation functions: compound_interest, simple_interest

use crate::helpers::*;
use reckon_plugin::prelude::*;
use std::collections::HashMap;

// ============ Compound Interest ============

pub struct CompoundInterestFn;

static COMPOUND_INTEREST_ARGS: [ArgMeta; 4] = [
    ArgMeta {
        name: "principal",
        typ: "Number",
        description: "Initial deposit",
        optional: false,
        default: None,
    },
    ArgMeta {
        name: "annual_rate",
        typ: "Number",
        description: "Annual interest rate as a percentage (e.g. 4.5)",
        optional: false,
        default: None,
    },
    ArgMeta {
        name: "years",
        typ: "Number",
        description: "Investment term in years",
        optional: false,
        default: None,
    },
    ArgMeta {
        name: "compounds_per_year",
        typ: "Number",
        description: "Compounding frequency per year",
        optional: true,
        default: Some("12"),
    },
];

static COMPOUND_INTEREST_EXAMPLES: [&str; 2] = [
    "compound_interest(1000, 5, 10) → {amount: 1647.01, ...}",
    "compound_interest(1000, 5, 10, 1) → {amount: 1628.89, ...}",
];

static COMPOUND_INTEREST_RELATED: [&str; 2] = ["simple_interest", "emi"];

impl FunctionPlugin for CompoundInterestFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "compound_interest",
            description: "Compound interest on a principal",
            usage: "compound_interest(principal, annual_rate, years, [compounds_per_year])",
            args: &COMPOUND_INTEREST_ARGS,
            returns: "Object",
            examples: &COMPOUND_INTEREST_EXAMPLES,
            category: "finance/interest",
            related: &COMPOUND_INTEREST_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if args.len() < 3 {
            return Value::Error(ReckonError::arg_count("compound_interest", 3, args.len()));
        }

        let principal = match extract_number(&args[0], "compound_interest", "principal") {
            Ok(n) => n,
            Err(e) => return Value::Error(e),
        };
        let annual_rate = match extract_number(&args[1], "compound_interest", "annual_rate") {
            Ok(n) => n,
            Err(e) => return Value::Error(e),
        };
        let years = match extract_number(&args[2], "compound_interest", "years") {
            Ok(n) => n,
            Err(e) => return Value::Error(e),
        };
        let compounds = extract_number_or_default(args, 3, 12.0);

        match calculate_compound_interest(principal, annual_rate, years, compounds) {
            Ok((amount, interest)) => interest_result(amount, interest),
            Err(e) => Value::Error(e),
        }
    }
}

fn calculate_compound_interest(
    principal: f64,
    annual_rate: f64,
    years: f64,
    compounds_per_year: f64,
) -> Result<(f64, f64), ReckonError> {
    validate_non_negative(principal, "compound_interest", "principal")?;
    validate_non_negative(annual_rate, "compound_interest", "annual_rate")?;
    validate_positive(years, "compound_interest", "years")?;
    validate_positive(compounds_per_year, "compound_interest", "compounds_per_year")?;

    let r = annual_rate / 100.0;
    let n = compounds_per_year;
    let amount = principal * (1.0 + r / n).powf(n * years);
    Ok((amount, amount - principal))
}

// ============ Simple Interest ============

pub struct SimpleInterestFn;

static SIMPLE_INTEREST_ARGS: [ArgMeta; 3] = [
    ArgMeta {
        name: "principal",
        typ: "Number",
        description: "Initial deposit",
        optional: false,
        default: None,
    },
    ArgMeta {
        name: "annual_rate",
        typ: "Number",
        description: "Annual interest rate as a percentage (e.g. 4.5)",
        optional: false,
        default: None,
    },
    ArgMeta {
        name: "years",
        typ: "Number",
        description: "Investment term in years",
        optional: false,
        default: None,
    },
];

static SIMPLE_INTEREST_EXAMPLES: [&str; 1] =
    ["simple_interest(1000, 5, 10) → {amount: 1500, interest: 500}"];

static SIMPLE_INTEREST_RELATED: [&str; 2] = ["compound_interest", "emi"];

impl FunctionPlugin for SimpleInterestFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "simple_interest",
            description: "Simple interest on a principal",
            usage: "simple_interest(principal, annual_rate, years)",
            args: &SIMPLE_INTEREST_ARGS,
            returns: "Object",
            examples: &SIMPLE_INTEREST_EXAMPLES,
            category: "finance/interest",
            related: &SIMPLE_INTEREST_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if args.len() < 3 {
            return Value::Error(ReckonError::arg_count("simple_interest", 3, args.len()));
        }

        let principal = match extract_number(&args[0], "simple_interest", "principal") {
            Ok(n) => n,
            Err(e) => return Value::Error(e),
        };
        let annual_rate = match extract_number(&args[1], "simple_interest", "annual_rate") {
            Ok(n) => n,
            Err(e) => return Value::Error(e),
        };
        let years = match extract_number(&args[2], "simple_interest", "years") {
            Ok(n) => n,
            Err(e) => return Value::Error(e),
        };

        match calculate_simple_interest(principal, annual_rate, years) {
            Ok((amount, interest)) => interest_result(amount, interest),
            Err(e) => Value::Error(e),
        }
    }
}

fn calculate_simple_interest(
    principal: f64,
    annual_rate: f64,
    years: f64,
) -> Result<(f64, f64), ReckonError> {
    validate_non_negative(principal, "simple_interest", "principal")?;
    validate_non_negative(annual_rate, "simple_interest", "annual_rate")?;
    validate_positive(years, "simple_interest", "years")?;

    let interest = principal * (annual_rate / 100.0) * years;
    Ok((principal + interest, interest))
}

fn interest_result(amount: f64, interest: f64) -> Value {
    let mut result = HashMap::new();
    result.insert("amount".to_string(), Value::Number(amount));
    result.insert("interest".to_string(), Value::Number(interest));
    Value::Object(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn eval_ctx() -> EvalContext {
        EvalContext::new(Arc::new(reckon_plugin::PluginRegistry::new()))
    }

    #[test]
    fn test_compound_interest_annual() {
        // 1000 at 5% compounded annually for 10 years: 1628.89
        let (amount, interest) = calculate_compound_interest(1000.0, 5.0, 10.0, 1.0).unwrap();
        assert!((amount - 1628.894626777442).abs() < 1e-9);
        assert!((interest - 628.894626777442).abs() < 1e-9);
    }

    #[test]
    fn test_compound_interest_monthly_default() {
        let f = CompoundInterestFn;
        let args = vec![Value::Number(1000.0), Value::Number(5.0), Value::Number(10.0)];
        let result = f.call(&args, &eval_ctx());
        let obj = result.as_object().unwrap();
        let amount = obj["amount"].as_number().unwrap();
        // Monthly compounding by default: 1647.01
        assert!((amount - 1647.00949769028).abs() < 1e-6);
    }

    #[test]
    fn test_simple_interest() {
        let (amount, interest) = calculate_simple_interest(1000.0, 5.0, 10.0).unwrap();
        assert_eq!(amount, 1500.0);
        assert_eq!(interest, 500.0);
    }

    #[test]
    fn test_interest_rejects_bad_inputs() {
        assert!(calculate_compound_interest(-1.0, 5.0, 1.0, 12.0).is_err());
        assert!(calculate_compound_interest(1000.0, 5.0, 0.0, 12.0).is_err());
        assert!(calculate_compound_interest(1000.0, 5.0, 1.0, 0.0).is_err());
        assert!(calculate_simple_interest(1000.0, -5.0, 1.0).is_err());
    }

    #[test]
    fn test_arg_count_error() {
        let f = SimpleInterestFn;
        let result = f.call(&[Value::Number(1000.0)], &eval_ctx());
        match result {
            Value::Error(e) => assert_eq!(e.code, codes::ARG_COUNT),
            other => panic!("expected error, got {:?}", other),
        }
    }
}
