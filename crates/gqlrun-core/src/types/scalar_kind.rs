use crate::value::ScalarValue;

/// The built-in scalar types every schema understands without registration.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum ScalarKind {
    Boolean,
    /// 64-bit float.
    Double,
    /// 32-bit float.
    Float,
    /// 32-bit signed integer.
    Int,
    /// 64-bit signed integer.
    Long,
    String,
}

impl ScalarKind {
    pub const ALL: [ScalarKind; 6] = [
        ScalarKind::Boolean,
        ScalarKind::Double,
        ScalarKind::Float,
        ScalarKind::Int,
        ScalarKind::Long,
        ScalarKind::String,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Boolean" => Some(ScalarKind::Boolean),
            "Double" => Some(ScalarKind::Double),
            "Float" => Some(ScalarKind::Float),
            "Int" => Some(ScalarKind::Int),
            "Long" => Some(ScalarKind::Long),
            "String" => Some(ScalarKind::String),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ScalarKind::Boolean => "Boolean",
            ScalarKind::Double => "Double",
            ScalarKind::Float => "Float",
            ScalarKind::Int => "Int",
            ScalarKind::Long => "Long",
            ScalarKind::String => "String",
        }
    }

    /// Converts `value` to this kind if that can be done without changing its
    /// meaning: an exact match, or one of the widenings `Int -> Long`,
    /// `Int -> Float` (for integers `f32` represents exactly), `Int -> Double`,
    /// and `Float -> Double`.
    pub fn widen(&self, value: ScalarValue) -> Option<ScalarValue> {
        match (*self, value) {
            (ScalarKind::Boolean, v @ ScalarValue::Boolean(_))
            | (ScalarKind::Double, v @ ScalarValue::Double(_))
            | (ScalarKind::Float, v @ ScalarValue::Float(_))
            | (ScalarKind::Int, v @ ScalarValue::Int(_))
            | (ScalarKind::Long, v @ ScalarValue::Long(_))
            | (ScalarKind::String, v @ ScalarValue::String(_)) => Some(v),

            (ScalarKind::Long, ScalarValue::Int(i)) => Some(ScalarValue::Long(i.into())),
            // f32 holds integers exactly only up to 2^24 in magnitude.
            (ScalarKind::Float, ScalarValue::Int(i)) => {
                let f = i as f32;
                (f as i32 == i).then_some(ScalarValue::Float(f))
            },
            (ScalarKind::Double, ScalarValue::Int(i)) => Some(ScalarValue::Double(i.into())),
            (ScalarKind::Double, ScalarValue::Float(f)) => Some(ScalarValue::Double(f.into())),

            _ => None,
        }
    }
}

impl std::fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
