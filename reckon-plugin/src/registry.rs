//! Plugin Registry

use crate::{EvalContext, FunctionMeta, FunctionPlugin};
use reckon_core::{ReckonError, Value};
use std::collections::HashMap;
use std::sync::Arc;

/// Central registry of calculator functions
pub struct PluginRegistry {
    functions: HashMap<String, Arc<dyn FunctionPlugin>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self { functions: HashMap::new() }
    }

    pub fn with_function<F: FunctionPlugin + 'static>(mut self, f: F) -> Self {
        let name = f.meta().name.to_lowercase();
        self.functions.insert(name, Arc::new(f));
        self
    }

    pub fn get_function(&self, name: &str) -> Option<&dyn FunctionPlugin> {
        self.functions.get(&name.to_lowercase()).map(|f| f.as_ref())
    }

    pub fn function_count(&self) -> usize {
        self.functions.len()
    }

    pub fn call_function(&self, name: &str, args: &[Value], ctx: &EvalContext) -> Value {
        match self.get_function(name) {
            Some(f) => f.call(args, ctx),
            None => {
                // Suggest similar function names in the error message
                let similar = self.find_similar_functions(name);
                let mut err = ReckonError::undefined_func(name);
                if !similar.is_empty() {
                    err = err.with_suggestion(format!(
                        "Similar: {}. Use help() for full list.",
                        similar.join(", ")
                    ));
                }
                Value::Error(err)
            }
        }
    }

    /// Up to five function names similar to the given name
    fn find_similar_functions(&self, name: &str) -> Vec<String> {
        let query = name.to_lowercase();
        let mut matches: Vec<(String, usize)> = self
            .functions
            .keys()
            .filter_map(|candidate| {
                let score = Self::similarity_score(&query, candidate);
                (score > 0).then(|| (candidate.clone(), score))
            })
            .collect();

        matches.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        matches.into_iter().take(5).map(|(name, _)| name).collect()
    }

    fn similarity_score(query: &str, candidate: &str) -> usize {
        let mut score = 0;

        if candidate.starts_with(query) {
            score += 100;
        } else if candidate.contains(query) {
            score += 50;
        } else if query.contains(candidate) {
            score += 30;
        }

        // Character overlap as a weak signal
        let query_chars: std::collections::HashSet<char> = query.chars().collect();
        let candidate_chars: std::collections::HashSet<char> = candidate.chars().collect();
        score += query_chars.intersection(&candidate_chars).count() * 2;

        let len_diff = (query.len() as i32 - candidate.len() as i32).unsigned_abs() as usize;
        if len_diff < 5 && score > 0 {
            score += 5 - len_diff;
        }

        score
    }

    pub fn help(&self, name: Option<&str>) -> Value {
        match name {
            Some(n) => self.help_for(n),
            None => self.general_help(),
        }
    }

    fn help_for(&self, name: &str) -> Value {
        match self.functions.get(&name.to_lowercase()) {
            Some(f) => Value::Object(Self::function_to_help(f.meta())),
            None => Value::Error(ReckonError::undefined_func(name)),
        }
    }

    fn general_help(&self) -> Value {
        let mut help = HashMap::new();

        let mut funcs_by_cat: HashMap<String, Vec<String>> = HashMap::new();
        for (name, f) in &self.functions {
            let cat = f.meta().category.to_string();
            funcs_by_cat.entry(cat).or_default().push(name.clone());
        }
        for names in funcs_by_cat.values_mut() {
            names.sort();
        }
        help.insert(
            "functions".to_string(),
            Value::Object(
                funcs_by_cat
                    .into_iter()
                    .map(|(k, v)| (k, Value::List(v.into_iter().map(Value::Text).collect())))
                    .collect(),
            ),
        );

        help.insert(
            "usage".to_string(),
            Value::Text("Call help('function_name') for detailed help.".to_string()),
        );

        Value::Object(help)
    }

    fn function_to_help(meta: FunctionMeta) -> HashMap<String, Value> {
        let mut help = HashMap::new();
        help.insert("name".to_string(), Value::Text(meta.name.to_string()));
        help.insert("description".to_string(), Value::Text(meta.description.to_string()));
        help.insert("usage".to_string(), Value::Text(meta.usage.to_string()));
        help.insert("returns".to_string(), Value::Text(meta.returns.to_string()));
        help.insert("category".to_string(), Value::Text(meta.category.to_string()));
        help.insert(
            "args".to_string(),
            Value::List(
                meta.args
                    .iter()
                    .map(|a| {
                        let mut arg = HashMap::new();
                        arg.insert("name".to_string(), Value::Text(a.name.to_string()));
                        arg.insert("type".to_string(), Value::Text(a.typ.to_string()));
                        arg.insert("description".to_string(), Value::Text(a.description.to_string()));
                        arg.insert("optional".to_string(), Value::Bool(a.optional));
                        Value::Object(arg)
                    })
                    .collect(),
            ),
        );
        help.insert(
            "examples".to_string(),
            Value::List(meta.examples.iter().map(|e| Value::Text(e.to_string())).collect()),
        );
        help
    }

    pub fn list_functions(&self, category: Option<&str>) -> Value {
        let mut metas: Vec<FunctionMeta> = self
            .functions
            .values()
            .map(|f| f.meta())
            .filter(|m| category.map_or(true, |c| m.category == c))
            .collect();
        metas.sort_by_key(|m| m.name);

        Value::List(
            metas
                .into_iter()
                .map(|meta| {
                    let mut obj = HashMap::new();
                    obj.insert("name".to_string(), Value::Text(meta.name.to_string()));
                    obj.insert("description".to_string(), Value::Text(meta.description.to_string()));
                    obj.insert("usage".to_string(), Value::Text(meta.usage.to_string()));
                    obj.insert("category".to_string(), Value::Text(meta.category.to_string()));
                    Value::Object(obj)
                })
                .collect(),
        )
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ArgMeta, FunctionMeta};

    struct Double;

    static DOUBLE_ARGS: [ArgMeta; 1] =
        [ArgMeta::required("x", "Number", "Value to double")];
    static DOUBLE_EXAMPLES: [&str; 1] = ["double(21) → 42"];
    static DOUBLE_RELATED: [&str; 0] = [];

    impl FunctionPlugin for Double {
        fn meta(&self) -> FunctionMeta {
            FunctionMeta {
                name: "double",
                description: "Double a number",
                usage: "double(x)",
                args: &DOUBLE_ARGS,
                returns: "Number",
                examples: &DOUBLE_EXAMPLES,
                category: "test",
                related: &DOUBLE_RELATED,
            }
        }

        fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
            match args.first().and_then(|v| v.as_number()) {
                Some(x) => Value::Number(x * 2.0),
                None => Value::Error(ReckonError::arg_count("double", 1, args.len())),
            }
        }
    }

    fn ctx() -> EvalContext {
        EvalContext::new(Arc::new(PluginRegistry::new()))
    }

    #[test]
    fn test_register_and_call() {
        let registry = PluginRegistry::new().with_function(Double);
        let result = registry.call_function("double", &[Value::Number(21.0)], &ctx());
        assert_eq!(result.as_number(), Some(42.0));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = PluginRegistry::new().with_function(Double);
        assert!(registry.get_function("DOUBLE").is_some());
    }

    #[test]
    fn test_unknown_function_suggests_similar() {
        let registry = PluginRegistry::new().with_function(Double);
        let result = registry.call_function("doubl", &[], &ctx());
        let err = result.as_error().unwrap();
        assert_eq!(err.code, reckon_core::codes::UNDEFINED_FUNC);
        assert!(err.suggestion.as_ref().unwrap().contains("double"));
    }

    #[test]
    fn test_help_for_function() {
        let registry = PluginRegistry::new().with_function(Double);
        let help = registry.help(Some("double"));
        assert_eq!(help.get("name").as_text(), Some("double"));
        assert_eq!(help.get("usage").as_text(), Some("double(x)"));
    }

    #[test]
    fn test_list_functions_filters_by_category() {
        let registry = PluginRegistry::new().with_function(Double);
        let all = registry.list_functions(None);
        assert_eq!(all.as_list().unwrap().len(), 1);
        let none = registry.list_functions(Some("matrix"));
        assert!(none.as_list().unwrap().is_empty());
    }
}
