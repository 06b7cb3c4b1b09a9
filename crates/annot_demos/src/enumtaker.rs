//! A component driven by a runtime-declared enumeration.

use std::fmt;
use std::sync::{Arc, OnceLock};

use annot_core::{
    Anno, AnnoResult, Bound, CallArgs, CallTyped, ElementType, EnumMember, EnumType, Signature,
    SignatureBuilder,
};

/// The `Status` enumeration shared by every [`EnumTaker`].
pub fn status() -> &'static Arc<EnumType> {
    static STATUS: OnceLock<Arc<EnumType>> = OnceLock::new();
    STATUS.get_or_init(|| EnumType::new("Status", [("good", 0), ("bad", 1)]))
}

/// Holds one member of [`status`].
pub struct EnumTaker {
    bound: Bound<'static>,
}

impl CallTyped for EnumTaker {
    fn call_types() -> &'static Signature {
        static TYPES: OnceLock<Signature> = OnceLock::new();
        TYPES.get_or_init(|| {
            SignatureBuilder::new("EnumTaker")
                .declare(Anno::new(
                    "status",
                    ElementType::Enum(Arc::clone(status())),
                    "The status",
                ))
                .finish()
                .unwrap_or_else(|err| panic!("EnumTaker call types: {err}"))
        })
    }
}

impl EnumTaker {
    pub fn new(args: CallArgs) -> AnnoResult<Self> {
        Ok(EnumTaker {
            bound: Self::call_types().bind(args)?,
        })
    }

    pub fn status(&self) -> &EnumMember {
        self.bound.member("status")
    }
}

impl fmt::Display for EnumTaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bound)
    }
}
