//! Type algebra: every operation returns a new descriptor and leaves its
//! operands untouched.

use serde_json::Value;

use wtypes_util::exact_integer;

use super::arg::SchemaArg;
use super::descriptor::TypeDescriptor;
use super::factory::TypeFactory;
use super::kind::BaseKind;
use super::modifier::Modifier;
use crate::error::SchemaDefinitionError;

type AlgebraResult = Result<TypeDescriptor, SchemaDefinitionError>;

/// How [`compose`] combines two types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComposeOp {
    /// Document merge, see [`TypeDescriptor::add`].
    Merge,
    AllOf,
    AnyOf,
    OneOf,
    /// The first type, and not the second.
    Not,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CmpOp {
    Lt,
    Le,
    Gt,
    Ge,
}

impl CmpOp {
    /// The operator seen from the other operand: `10 < T` is `T > 10`.
    pub fn mirrored(self) -> Self {
        match self {
            Self::Lt => Self::Gt,
            Self::Le => Self::Ge,
            Self::Gt => Self::Lt,
            Self::Ge => Self::Le,
        }
    }
}

/// One side of [`compare`].
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Type(TypeDescriptor),
    Literal(Value),
}

impl From<TypeDescriptor> for Operand {
    fn from(ty: TypeDescriptor) -> Self {
        Self::Type(ty)
    }
}

impl From<&TypeDescriptor> for Operand {
    fn from(ty: &TypeDescriptor) -> Self {
        Self::Type(ty.clone())
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Self::Literal(value)
    }
}

macro_rules! operand_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Operand {
                fn from(value: $t) -> Self {
                    Self::Literal(Value::from(value))
                }
            }
        )*
    };
}

operand_from!(i32, i64, u32, u64, f64);

fn unsupported(ty: &TypeDescriptor, what: &str) -> SchemaDefinitionError {
    SchemaDefinitionError::new("", format!("{} values do not support {what}", ty.kind()))
        .for_type(ty.name())
}

impl TypeDescriptor {
    /// Merges `other`'s document into a copy of this one. The result is
    /// named after both titles and keeps this type's flags.
    pub fn add(&self, other: &TypeDescriptor) -> AlgebraResult {
        let mut name = format!("{}{}", self.title(), other.title());
        if name.is_empty() {
            name = self.name().to_string();
        }
        TypeFactory::create(self, name, other.schema().clone())
    }

    pub fn all_of(&self, other: &TypeDescriptor) -> AlgebraResult {
        Modifier::AllOf.apply(vec![self, other])
    }

    pub fn any_of(&self, other: &TypeDescriptor) -> AlgebraResult {
        Modifier::AnyOf.apply(vec![self, other])
    }

    pub fn one_of(&self, other: &TypeDescriptor) -> AlgebraResult {
        Modifier::OneOf.apply(vec![self, other])
    }

    pub fn negate(&self) -> AlgebraResult {
        Modifier::Not.apply(self)
    }

    /// Bracket application by kind.
    ///
    /// Objects take a map of member types (`properties`) or one or more
    /// value types (`additionalProperties` of their `anyOf`). Arrays take an
    /// item type, or a list of them: positional for tuple-like types, an
    /// `anyOf` otherwise.
    pub fn index(&self, arg: impl Into<SchemaArg>) -> AlgebraResult {
        let arg = arg.into();
        let constraint = match self.kind() {
            BaseKind::Object => match arg {
                SchemaArg::Map(_) => Modifier::Properties.apply(arg)?,
                other => Modifier::AdditionalProperties.apply(Modifier::AnyOf.apply(other)?)?,
            },
            BaseKind::Array => match arg {
                SchemaArg::List(_) if self.flags().positional_items => {
                    Modifier::Items.apply(arg)?
                }
                SchemaArg::List(_) => Modifier::Items.apply(Modifier::AnyOf.apply(arg)?)?,
                other => Modifier::Items.apply(other)?,
            },
            _ => return Err(unsupported(self, "bracket application")),
        };
        self.add(&constraint)
    }

    /// Exclusive lower bound; for strings, arrays and objects a minimum
    /// length of `bound`.
    pub fn gt(&self, bound: impl Into<Value>) -> AlgebraResult {
        self.bound(CmpOp::Gt, bound.into())
    }

    pub fn ge(&self, bound: impl Into<Value>) -> AlgebraResult {
        self.bound(CmpOp::Ge, bound.into())
    }

    /// Exclusive upper bound; for strings, arrays and objects a maximum
    /// length of `bound`.
    pub fn lt(&self, bound: impl Into<Value>) -> AlgebraResult {
        self.bound(CmpOp::Lt, bound.into())
    }

    pub fn le(&self, bound: impl Into<Value>) -> AlgebraResult {
        self.bound(CmpOp::Le, bound.into())
    }

    pub fn multiple_of(&self, divisor: impl Into<Value>) -> AlgebraResult {
        if !self.kind().is_numeric() {
            return Err(unsupported(self, "division"));
        }
        let divisor: Value = divisor.into();
        self.add(&Modifier::MultipleOf.apply(divisor)?)
    }

    pub fn pattern(&self, regex: &str) -> AlgebraResult {
        if self.kind() != BaseKind::String {
            return Err(unsupported(self, "patterns"));
        }
        self.add(&Modifier::Pattern.apply(regex)?)
    }

    fn bound(&self, op: CmpOp, bound: Value) -> AlgebraResult {
        let kind = self.kind();
        if kind.is_numeric() {
            if !bound.is_number() {
                return Err(SchemaDefinitionError::new("", format!("bound {bound} is not a number"))
                    .for_type(self.name()));
            }
            let modifier = match op {
                CmpOp::Gt => Modifier::ExclusiveMinimum,
                CmpOp::Ge => Modifier::Minimum,
                CmpOp::Lt => Modifier::ExclusiveMaximum,
                CmpOp::Le => Modifier::Maximum,
            };
            return self.add(&modifier.apply(bound)?);
        }

        let (min, max) = match kind {
            BaseKind::String => (Modifier::MinLength, Modifier::MaxLength),
            BaseKind::Array => (Modifier::MinItems, Modifier::MaxItems),
            BaseKind::Object => (Modifier::MinProperties, Modifier::MaxProperties),
            _ => return Err(unsupported(self, "comparison")),
        };
        let Some(n) = bound
            .as_number()
            .and_then(exact_integer)
            .and_then(|n| u64::try_from(n).ok())
        else {
            return Err(SchemaDefinitionError::new(
                "",
                format!("length bound {bound} is not a non-negative integer"),
            )
            .for_type(self.name()));
        };
        let constraint = match op {
            CmpOp::Gt | CmpOp::Ge => min.apply(n)?,
            CmpOp::Lt | CmpOp::Le => max.apply(n)?,
        };
        self.add(&constraint)
    }
}

/// Combines two types with `op`.
pub fn compose(a: &TypeDescriptor, b: &TypeDescriptor, op: ComposeOp) -> AlgebraResult {
    match op {
        ComposeOp::Merge => a.add(b),
        ComposeOp::AllOf => a.all_of(b),
        ComposeOp::AnyOf => a.any_of(b),
        ComposeOp::OneOf => a.one_of(b),
        ComposeOp::Not => a.add(&b.negate()?),
    }
}

/// `lhs op rhs` where exactly one side is a type. A literal on the left
/// produces the mirrored bound: `compare(10, Lt, Integer)` is
/// `Integer.gt(10)`.
pub fn compare(lhs: impl Into<Operand>, op: CmpOp, rhs: impl Into<Operand>) -> AlgebraResult {
    match (lhs.into(), rhs.into()) {
        (Operand::Type(ty), Operand::Literal(bound)) => ty.bound(op, bound),
        (Operand::Literal(bound), Operand::Type(ty)) => ty.bound(op.mirrored(), bound),
        _ => Err(SchemaDefinitionError::new(
            "",
            "a comparison needs exactly one type operand",
        )),
    }
}
