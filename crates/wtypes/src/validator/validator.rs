//! Runtime validator - checks JSON values against schema documents.
//!
//! Dispatch is a plain recursive walk over the document; nothing is compiled
//! ahead of time except regular expressions, which are cached.

use regex::Regex;
use serde_json::{Map, Number, Value};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::trace;

use wtypes_formats::{FormatValidator, Formats};
use wtypes_util::{
    compare_numbers, deep_equal, escape_component, exact_integer, format_json_pointer,
    is_multiple_of, kind_of,
};

use super::types::ValidatorOptions;
use crate::error::{
    Error, IllegalConstructionError, Result, SchemaDefinitionError, ValidationError,
};
use crate::schema::{Keyword, SchemaDocument, SimpleType};
use crate::type_def::{NoResolver, TypeDescriptor, TypeResolver};
use crate::value::{Instance, Mutation};

/// The validation strategy: format checks, forward-reference resolution and
/// options, built once and passed to every call that validates.
///
/// Cloning is cheap and clones share the pattern cache.
#[derive(Clone)]
pub struct Validator {
    formats: Arc<dyn FormatValidator>,
    resolver: Arc<dyn TypeResolver>,
    options: ValidatorOptions,
    patterns: Arc<Mutex<HashMap<String, Regex>>>,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// The schema object under evaluation and the value it is applied to.
struct Scope<'a> {
    value: &'a Value,
    schema: &'a Map<String, Value>,
    path: &'a [String],
    depth: usize,
}

impl<'a> Scope<'a> {
    fn get(&self, keyword: Keyword) -> Option<&'a Value> {
        self.schema.get(keyword.as_str())
    }

    fn fail(&self, keyword: Keyword, reason: impl Into<String>) -> Error {
        ValidationError {
            keyword: Some(keyword),
            reason: reason.into(),
            value: self.value.clone(),
            schema: Value::Object(self.schema.clone()),
            path: self.path.to_vec(),
        }
        .into()
    }
}

fn malformed(keyword: Keyword, expected: &str) -> Error {
    SchemaDefinitionError::new(
        format!("/{}", escape_component(keyword.as_str())),
        format!("`{keyword}` must be {expected}"),
    )
    .into()
}

fn child(path: &[String], segment: impl ToString) -> Vec<String> {
    let mut p = path.to_vec();
    p.push(segment.to_string());
    p
}

fn number_keyword<'a>(scope: &Scope<'a>, keyword: Keyword) -> Result<Option<&'a Number>> {
    match scope.get(keyword) {
        None => Ok(None),
        Some(Value::Number(n)) => Ok(Some(n)),
        Some(_) => Err(malformed(keyword, "a number")),
    }
}

fn count_keyword(scope: &Scope<'_>, keyword: Keyword) -> Result<Option<u64>> {
    match scope.get(keyword) {
        None => Ok(None),
        Some(value) => value
            .as_number()
            .and_then(exact_integer)
            .and_then(|n| u64::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| malformed(keyword, "a non-negative integer")),
    }
}

fn schema_list(value: &Value, keyword: Keyword) -> Result<&Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| malformed(keyword, "an array of schemas"))
}

fn simple_types(declared: &Value) -> Result<Vec<SimpleType>> {
    let parse = |name: &Value| {
        name.as_str()
            .and_then(SimpleType::parse)
            .ok_or_else(|| malformed(Keyword::Type, "a simple type name or a list of them"))
    };
    match declared {
        Value::Array(names) => names.iter().map(parse).collect(),
        single => Ok(vec![parse(single)?]),
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| {
        SchemaDefinitionError::new(
            "/pattern",
            format!("invalid regular expression `{pattern}`: {e}"),
        )
        .into()
    })
}

impl Validator {
    /// A validator with the standard formats and no type resolver.
    pub fn new() -> Self {
        Self {
            formats: Arc::new(Formats::standard()),
            resolver: Arc::new(NoResolver),
            options: ValidatorOptions::default(),
            patterns: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn with_formats(mut self, formats: impl FormatValidator + 'static) -> Self {
        self.formats = Arc::new(formats);
        self
    }

    pub fn with_resolver(mut self, resolver: impl TypeResolver + 'static) -> Self {
        self.resolver = Arc::new(resolver);
        self
    }

    pub fn with_options(mut self, options: ValidatorOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ValidatorOptions {
        &self.options
    }

    pub fn formats(&self) -> &dyn FormatValidator {
        self.formats.as_ref()
    }

    // ------------------------------------------------------------------
    // Entry points

    /// Validates `value` against the type's document.
    pub fn validate(&self, ty: &TypeDescriptor, value: &Value) -> Result<()> {
        self.validate_document(value, ty.schema())
    }

    /// Probe form of [`Validator::validate`]: any error is `false`.
    pub fn is_valid(&self, ty: &TypeDescriptor, value: &Value) -> bool {
        self.validate(ty, value).is_ok()
    }

    pub fn validate_document(&self, value: &Value, doc: &SchemaDocument) -> Result<()> {
        self.check_map(value, doc.as_map(), &[], 0)
    }

    /// Validates against a schema fragment: an object or a boolean schema.
    pub fn validate_schema(&self, value: &Value, fragment: &Value) -> Result<()> {
        self.check(value, fragment, &[], 0)
    }

    pub(crate) fn validate_schema_at(
        &self,
        value: &Value,
        fragment: &Value,
        path: &[String],
    ) -> Result<()> {
        self.check(value, fragment, path, 0)
    }

    /// Follows pure forward references until a concrete type is reached.
    pub fn resolve_type(&self, ty: &TypeDescriptor) -> Result<TypeDescriptor> {
        let mut current = ty.clone();
        let mut hops = 0;
        while let Some(name) = current.forward_target() {
            if hops >= self.options.max_depth {
                return Err(Error::RecursionLimit(self.options.max_depth));
            }
            let next = self.resolver.resolve(name)?;
            current = next;
            hops += 1;
        }
        Ok(current)
    }

    /// Builds a validated instance. Without a value, the default is
    /// resolved first (see [`Validator::resolve_default`]).
    pub fn construct(&self, ty: &TypeDescriptor, value: Option<Value>) -> Result<Instance> {
        let target = self.resolve_type(ty)?;
        if !target.is_instantiable() {
            return Err(IllegalConstructionError {
                type_name: target.name().to_string(),
            }
            .into());
        }
        let value = match value {
            Some(value) => value,
            None => self.resolve_default(ty)?,
        };
        self.validate(ty, &value)?;
        Ok(Instance::new(ty.clone(), value))
    }

    /// The value constructed when none is given: the document `default`,
    /// else an object of the property defaults, else the kind's zero value.
    pub fn resolve_default(&self, ty: &TypeDescriptor) -> Result<Value> {
        let target = self.resolve_type(ty)?;
        let schema = target.schema();
        if let Some(default) = schema.get(Keyword::Default) {
            return Ok(default.clone());
        }
        if let Some(properties) = schema.properties() {
            let defaults: Map<String, Value> = properties
                .iter()
                .filter_map(|(name, property)| {
                    property
                        .get(Keyword::Default.as_str())
                        .map(|default| (name.clone(), default.clone()))
                })
                .collect();
            return Ok(Value::Object(defaults));
        }
        Ok(target.kind().zero_value())
    }

    /// Applies a guarded mutation. Returns the value removed by `Remove`,
    /// `Pop` and `SetIndex`, or the value replaced by `Set`.
    pub fn mutate(&self, instance: &mut Instance, mutation: Mutation) -> Result<Option<Value>> {
        match mutation {
            Mutation::Set { key, value } => instance.object_mut(self)?.set(key, value),
            Mutation::Update(entries) => instance.object_mut(self)?.update(entries).map(|()| None),
            Mutation::Remove(key) => instance.object_mut(self)?.remove(&key).map(Some),
            Mutation::SetIndex { index, value } => {
                instance.array_mut(self)?.set(index, value).map(Some)
            }
            Mutation::Insert { index, value } => {
                instance.array_mut(self)?.insert(index, value).map(|()| None)
            }
            Mutation::Append(value) => instance.array_mut(self)?.append(value).map(|()| None),
            Mutation::Extend(values) => instance.array_mut(self)?.extend(values).map(|()| None),
            Mutation::Pop(index) => instance.array_mut(self)?.pop(index).map(Some),
        }
    }

    // ------------------------------------------------------------------
    // Dispatch

    fn check(&self, value: &Value, schema: &Value, path: &[String], depth: usize) -> Result<()> {
        match schema {
            Value::Bool(true) => Ok(()),
            Value::Bool(false) => Err(ValidationError {
                keyword: None,
                reason: format!("{value} is not allowed here"),
                value: value.clone(),
                schema: schema.clone(),
                path: path.to_vec(),
            }
            .into()),
            Value::Object(map) => self.check_map(value, map, path, depth),
            _ => Err(SchemaDefinitionError::new(
                "",
                "a schema must be an object or a boolean",
            )
            .into()),
        }
    }

    /// Probes a branch: a validation failure is a mismatch, any other error
    /// propagates.
    fn matches(&self, value: &Value, schema: &Value, path: &[String], depth: usize) -> Result<bool> {
        match self.check(value, schema, path, depth) {
            Ok(()) => Ok(true),
            Err(err) if err.is_validation() => Ok(false),
            Err(err) => Err(err),
        }
    }

    fn check_map(
        &self,
        value: &Value,
        schema: &Map<String, Value>,
        path: &[String],
        depth: usize,
    ) -> Result<()> {
        if depth > self.options.max_depth {
            return Err(Error::RecursionLimit(self.options.max_depth));
        }
        if schema.is_empty() {
            return Ok(());
        }
        if let Some(key) = schema.keys().find(|key| Keyword::parse(key).is_none()) {
            return Err(SchemaDefinitionError::new(
                format!("/{}", escape_component(key)),
                format!("unknown keyword `{key}`"),
            )
            .into());
        }

        let scope = Scope {
            value,
            schema,
            path,
            depth,
        };
        self.check_ref(&scope)?;
        self.check_combinators(&scope)?;
        self.check_conditional(&scope)?;
        self.check_literals(&scope)?;
        self.check_type(&scope)?;
        match value {
            Value::Number(n) => self.check_number(&scope, n),
            Value::String(s) => self.check_string(&scope, s),
            Value::Array(items) => self.check_array(&scope, items),
            Value::Object(members) => self.check_object(&scope, members),
            Value::Null | Value::Bool(_) => Ok(()),
        }
    }

    fn check_ref(&self, scope: &Scope<'_>) -> Result<()> {
        let Some(reference) = scope.get(Keyword::Ref) else {
            return Ok(());
        };
        let name = reference
            .as_str()
            .ok_or_else(|| malformed(Keyword::Ref, "a type name"))?;
        trace!(name, path = %format_json_pointer(scope.path), "following type reference");
        let target = self.resolver.resolve(name)?;
        self.check_map(scope.value, target.schema().as_map(), scope.path, scope.depth + 1)
    }

    // ------------------------------------------------------------------
    // Combinators

    fn check_combinators(&self, scope: &Scope<'_>) -> Result<()> {
        let (value, path, depth) = (scope.value, scope.path, scope.depth + 1);

        if let Some(all) = scope.get(Keyword::AllOf) {
            for schema in schema_list(all, Keyword::AllOf)? {
                self.check(value, schema, path, depth)?;
            }
        }

        if let Some(any) = scope.get(Keyword::AnyOf) {
            let branches = schema_list(any, Keyword::AnyOf)?;
            let mut matched = false;
            for schema in branches {
                if self.matches(value, schema, path, depth)? {
                    matched = true;
                    break;
                }
            }
            if !matched {
                return Err(scope.fail(
                    Keyword::AnyOf,
                    format!("{value} matches none of the {} alternatives", branches.len()),
                ));
            }
        }

        if let Some(one) = scope.get(Keyword::OneOf) {
            let branches = schema_list(one, Keyword::OneOf)?;
            let mut count = 0;
            for schema in branches {
                if self.matches(value, schema, path, depth)? {
                    count += 1;
                    if count > 1 {
                        break;
                    }
                }
            }
            match count {
                1 => {}
                0 => {
                    return Err(scope.fail(
                        Keyword::OneOf,
                        format!("{value} matches none of the {} alternatives", branches.len()),
                    ))
                }
                _ => {
                    return Err(scope.fail(
                        Keyword::OneOf,
                        format!("{value} matches more than one alternative"),
                    ))
                }
            }
        }

        if let Some(negated) = scope.get(Keyword::Not) {
            if self.matches(value, negated, path, depth)? {
                return Err(scope.fail(Keyword::Not, format!("{value} matches the negated schema")));
            }
        }
        Ok(())
    }

    fn check_conditional(&self, scope: &Scope<'_>) -> Result<()> {
        let Some(condition) = scope.get(Keyword::If) else {
            return Ok(());
        };
        let depth = scope.depth + 1;
        let branch = if self.matches(scope.value, condition, scope.path, depth)? {
            Keyword::Then
        } else {
            Keyword::Else
        };
        match scope.get(branch) {
            Some(schema) => self.check(scope.value, schema, scope.path, depth),
            None => Ok(()),
        }
    }

    // ------------------------------------------------------------------
    // Any kind

    fn check_literals(&self, scope: &Scope<'_>) -> Result<()> {
        let value = scope.value;
        if let Some(options) = scope.get(Keyword::Enum) {
            let options = options
                .as_array()
                .ok_or_else(|| malformed(Keyword::Enum, "an array"))?;
            if !options.iter().any(|option| deep_equal(option, value)) {
                let listed = Value::Array(options.clone());
                return Err(scope.fail(Keyword::Enum, format!("{value} is not one of {listed}")));
            }
        }
        if let Some(expected) = scope.get(Keyword::Const) {
            if !deep_equal(expected, value) {
                return Err(scope.fail(Keyword::Const, format!("{value} is not {expected}")));
            }
        }
        Ok(())
    }

    fn check_type(&self, scope: &Scope<'_>) -> Result<()> {
        let Some(declared) = scope.get(Keyword::Type) else {
            return Ok(());
        };
        let types = simple_types(declared)?;
        if types.iter().any(|t| t.matches(scope.value)) {
            return Ok(());
        }
        let names: Vec<&str> = types.iter().map(|t| t.as_str()).collect();
        Err(scope.fail(
            Keyword::Type,
            format!(
                "expected {}, found {} {}",
                names.join(" or "),
                kind_of(scope.value),
                scope.value
            ),
        ))
    }

    // ------------------------------------------------------------------
    // Kind-specific clauses

    fn check_number(&self, scope: &Scope<'_>, n: &Number) -> Result<()> {
        if let Some(min) = number_keyword(scope, Keyword::Minimum)? {
            if compare_numbers(n, min) == Some(Ordering::Less) {
                return Err(scope.fail(
                    Keyword::Minimum,
                    format!("{n} is less than the minimum of {min}"),
                ));
            }
        }
        if let Some(max) = number_keyword(scope, Keyword::Maximum)? {
            if compare_numbers(n, max) == Some(Ordering::Greater) {
                return Err(scope.fail(
                    Keyword::Maximum,
                    format!("{n} is greater than the maximum of {max}"),
                ));
            }
        }
        if let Some(min) = number_keyword(scope, Keyword::ExclusiveMinimum)? {
            if compare_numbers(n, min) != Some(Ordering::Greater) {
                return Err(scope.fail(
                    Keyword::ExclusiveMinimum,
                    format!("{n} is not greater than {min}"),
                ));
            }
        }
        if let Some(max) = number_keyword(scope, Keyword::ExclusiveMaximum)? {
            if compare_numbers(n, max) != Some(Ordering::Less) {
                return Err(scope.fail(
                    Keyword::ExclusiveMaximum,
                    format!("{n} is not less than {max}"),
                ));
            }
        }
        if let Some(divisor) = number_keyword(scope, Keyword::MultipleOf)? {
            if !is_multiple_of(n, divisor) {
                return Err(scope.fail(
                    Keyword::MultipleOf,
                    format!("{n} is not a multiple of {divisor}"),
                ));
            }
        }
        Ok(())
    }

    fn check_string(&self, scope: &Scope<'_>, s: &str) -> Result<()> {
        let length = s.chars().count() as u64;
        if let Some(min) = count_keyword(scope, Keyword::MinLength)? {
            if length < min {
                return Err(scope.fail(
                    Keyword::MinLength,
                    format!("{} is shorter than {min} characters", scope.value),
                ));
            }
        }
        if let Some(max) = count_keyword(scope, Keyword::MaxLength)? {
            if length > max {
                return Err(scope.fail(
                    Keyword::MaxLength,
                    format!("{} is longer than {max} characters", scope.value),
                ));
            }
        }
        if let Some(pattern) = scope.get(Keyword::Pattern) {
            let pattern = pattern
                .as_str()
                .ok_or_else(|| malformed(Keyword::Pattern, "a string"))?;
            if !self.regex(pattern)?.is_match(s) {
                return Err(scope.fail(
                    Keyword::Pattern,
                    format!("{} does not match `{pattern}`", scope.value),
                ));
            }
        }
        if let Some(format) = scope.get(Keyword::Format) {
            let format = format
                .as_str()
                .ok_or_else(|| malformed(Keyword::Format, "a string"))?;
            if !self.formats.supports(format) {
                return Err(Error::UnknownFormat {
                    format: format.to_string(),
                    path: scope.path.to_vec(),
                });
            }
            if !self.formats.validate_format(s, format) {
                return Err(scope.fail(
                    Keyword::Format,
                    format!("{} is not a valid {format}", scope.value),
                ));
            }
        }
        Ok(())
    }

    fn check_array(&self, scope: &Scope<'_>, items: &[Value]) -> Result<()> {
        let depth = scope.depth + 1;
        match scope.get(Keyword::Items) {
            None => {}
            Some(Value::Array(positional)) => {
                for (i, (item, schema)) in items.iter().zip(positional).enumerate() {
                    self.check(item, schema, &child(scope.path, i), depth)?;
                }
                if let Some(additional) = scope.get(Keyword::AdditionalItems) {
                    if items.len() > positional.len() && additional == &Value::Bool(false) {
                        return Err(scope.fail(
                            Keyword::AdditionalItems,
                            format!(
                                "{} items given where at most {} are allowed",
                                items.len(),
                                positional.len()
                            ),
                        ));
                    }
                    for (i, item) in items.iter().enumerate().skip(positional.len()) {
                        self.check(item, additional, &child(scope.path, i), depth)?;
                    }
                }
            }
            Some(schema) => {
                for (i, item) in items.iter().enumerate() {
                    self.check(item, schema, &child(scope.path, i), depth)?;
                }
            }
        }

        let len = items.len() as u64;
        if let Some(min) = count_keyword(scope, Keyword::MinItems)? {
            if len < min {
                return Err(scope.fail(
                    Keyword::MinItems,
                    format!("{len} items given where at least {min} are required"),
                ));
            }
        }
        if let Some(max) = count_keyword(scope, Keyword::MaxItems)? {
            if len > max {
                return Err(scope.fail(
                    Keyword::MaxItems,
                    format!("{len} items given where at most {max} are allowed"),
                ));
            }
        }
        match scope.get(Keyword::UniqueItems) {
            None | Some(Value::Bool(false)) => {}
            Some(Value::Bool(true)) => {
                for (i, item) in items.iter().enumerate() {
                    if let Some(j) = items[..i].iter().position(|other| deep_equal(other, item)) {
                        return Err(scope.fail(
                            Keyword::UniqueItems,
                            format!("items {j} and {i} are equal"),
                        ));
                    }
                }
            }
            Some(_) => return Err(malformed(Keyword::UniqueItems, "a boolean")),
        }
        if let Some(schema) = scope.get(Keyword::Contains) {
            let mut found = false;
            for (i, item) in items.iter().enumerate() {
                if self.matches(item, schema, &child(scope.path, i), depth)? {
                    found = true;
                    break;
                }
            }
            if !found {
                return Err(scope.fail(Keyword::Contains, "no item matches the `contains` schema"));
            }
        }
        Ok(())
    }

    fn check_object(&self, scope: &Scope<'_>, members: &Map<String, Value>) -> Result<()> {
        let depth = scope.depth + 1;

        if let Some(required) = scope.get(Keyword::Required) {
            let names = required
                .as_array()
                .ok_or_else(|| malformed(Keyword::Required, "an array of names"))?;
            for name in names {
                let name = name
                    .as_str()
                    .ok_or_else(|| malformed(Keyword::Required, "an array of names"))?;
                if !members.contains_key(name) {
                    return Err(scope.fail(
                        Keyword::Required,
                        format!("missing required property `{name}`"),
                    ));
                }
            }
        }

        let count = members.len() as u64;
        if let Some(min) = count_keyword(scope, Keyword::MinProperties)? {
            if count < min {
                return Err(scope.fail(
                    Keyword::MinProperties,
                    format!("{count} properties given where at least {min} are required"),
                ));
            }
        }
        if let Some(max) = count_keyword(scope, Keyword::MaxProperties)? {
            if count > max {
                return Err(scope.fail(
                    Keyword::MaxProperties,
                    format!("{count} properties given where at most {max} are allowed"),
                ));
            }
        }

        let properties = match scope.get(Keyword::Properties) {
            None => None,
            Some(Value::Object(properties)) => Some(properties),
            Some(_) => return Err(malformed(Keyword::Properties, "an object of schemas")),
        };
        let pattern_properties: Vec<(Regex, &Value)> = match scope.get(Keyword::PatternProperties)
        {
            None => Vec::new(),
            Some(Value::Object(patterns)) => patterns
                .iter()
                .map(|(pattern, schema)| Ok((self.regex(pattern)?, schema)))
                .collect::<Result<_>>()?,
            Some(_) => {
                return Err(malformed(Keyword::PatternProperties, "an object of schemas"))
            }
        };
        let additional = scope.get(Keyword::AdditionalProperties);
        let property_names = scope.get(Keyword::PropertyNames);

        for (key, member) in members {
            let member_path = child(scope.path, key);
            let mut declared = false;
            if let Some(schema) = properties.and_then(|p| p.get(key)) {
                declared = true;
                self.check(member, schema, &member_path, depth)?;
            }
            for (pattern, schema) in &pattern_properties {
                if pattern.is_match(key) {
                    declared = true;
                    self.check(member, schema, &member_path, depth)?;
                }
            }
            match additional {
                Some(Value::Bool(false)) if !declared => {
                    return Err(scope.fail(
                        Keyword::AdditionalProperties,
                        format!("property `{key}` is not allowed"),
                    ));
                }
                Some(schema) if !declared => self.check(member, schema, &member_path, depth)?,
                _ => {}
            }
            if let Some(schema) = property_names {
                self.check(&Value::String(key.clone()), schema, &member_path, depth)?;
            }
        }

        if let Some(dependencies) = scope.get(Keyword::Dependencies) {
            let dependencies = dependencies
                .as_object()
                .ok_or_else(|| malformed(Keyword::Dependencies, "an object"))?;
            for (key, dependency) in dependencies {
                if !members.contains_key(key) {
                    continue;
                }
                match dependency {
                    Value::Array(names) => {
                        for name in names {
                            let name = name.as_str().ok_or_else(|| {
                                malformed(Keyword::Dependencies, "names or schemas")
                            })?;
                            if !members.contains_key(name) {
                                return Err(scope.fail(
                                    Keyword::Dependencies,
                                    format!("property `{key}` requires property `{name}`"),
                                ));
                            }
                        }
                    }
                    schema => self.check(scope.value, schema, scope.path, depth)?,
                }
            }
        }
        Ok(())
    }

    fn regex(&self, pattern: &str) -> Result<Regex> {
        if !self.options.cache_patterns {
            return compile(pattern);
        }
        let mut cache = self.patterns.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(re) = cache.get(pattern) {
            return Ok(re.clone());
        }
        let re = compile(pattern)?;
        cache.insert(pattern.to_string(), re.clone());
        Ok(re)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn check(value: Value, schema: Value) -> Result<()> {
        Validator::new().validate_schema(&value, &schema)
    }

    #[test]
    fn empty_and_boolean_schemas() {
        assert!(check(json!(1), json!({})).is_ok());
        assert!(check(json!(1), json!(true)).is_ok());
        let err = check(json!(1), json!(false)).unwrap_err();
        assert_eq!(err.as_validation().unwrap().keyword, None);
    }

    #[test]
    fn unknown_keyword_is_a_definition_error() {
        let err = check(json!(1), json!({"minimun": 1})).unwrap_err();
        assert!(matches!(err, Error::Definition(_)));
    }

    #[test]
    fn errors_carry_the_path_of_the_value() {
        let schema = json!({"properties": {"tags": {"items": {"type": "string"}}}});
        let err = check(json!({"tags": ["a", 2]}), schema).unwrap_err();
        let err = err.as_validation().unwrap();
        assert_eq!(err.keyword, Some(Keyword::Type));
        assert_eq!(err.pointer(), "/tags/1");
        assert_eq!(err.value, json!(2));
        assert_eq!(err.schema, json!({"type": "string"}));
    }

    #[test]
    fn pattern_is_a_search() {
        assert!(check(json!("xxabcxx"), json!({"pattern": "abc"})).is_ok());
        assert!(check(json!("xxabxx"), json!({"pattern": "abc"})).is_err());
        assert!(matches!(
            check(json!("a"), json!({"pattern": "("})),
            Err(Error::Definition(_))
        ));
    }

    #[test]
    fn lengths_count_code_points() {
        assert!(check(json!("héllo"), json!({"maxLength": 5})).is_ok());
        assert!(check(json!("日本"), json!({"minLength": 3})).is_err());
    }

    #[test]
    fn unknown_format_is_hard() {
        let err = check(json!("x"), json!({"format": "no-such-format"})).unwrap_err();
        assert!(matches!(err, Error::UnknownFormat { .. }));
        let err = check(json!("x"), json!({"anyOf": [{"format": "no-such-format"}, {}]})).unwrap_err();
        assert!(!err.is_validation());
    }

    #[test]
    fn format_applies_to_strings_only() {
        assert!(check(json!(3), json!({"format": "email"})).is_ok());
        assert!(check(json!("a@b.c"), json!({"format": "email"})).is_ok());
        assert!(check(json!("nope"), json!({"format": "email"})).is_err());
    }

    #[test]
    fn recursion_limit() {
        let validator = Validator::new().with_options(ValidatorOptions {
            max_depth: 2,
            ..ValidatorOptions::default()
        });
        let schema = json!({"not": {"not": {"not": {"type": "integer"}}}});
        let err = validator.validate_schema(&json!(1), &schema).unwrap_err();
        assert_eq!(err, Error::RecursionLimit(2));
    }

    #[test]
    fn pattern_cache_is_optional() {
        let validator = Validator::new().with_options(ValidatorOptions {
            cache_patterns: false,
            ..ValidatorOptions::default()
        });
        assert!(validator.validate_schema(&json!("ab"), &json!({"pattern": "^a"})).is_ok());
        assert!(validator.patterns.lock().unwrap().is_empty());
        let cached = Validator::new();
        assert!(cached.validate_schema(&json!("ab"), &json!({"pattern": "^a"})).is_ok());
        assert!(cached.patterns.lock().unwrap().contains_key("^a"));
    }
}
