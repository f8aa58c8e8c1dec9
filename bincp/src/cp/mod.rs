mod constraint;
mod linear;
mod model;
mod vars;

#[doc(inline)]
pub use constraint::Constraint;
#[doc(inline)]
pub use constraint::IntervalDef;
#[doc(inline)]
pub use linear::LinearExpr;
#[doc(inline)]
pub use model::CpModel;
#[doc(inline)]
pub use vars::BoolVar;
#[doc(inline)]
pub use vars::IntVar;
#[doc(inline)]
pub use vars::IntervalVar;
#[doc(inline)]
pub use vars::Literal;
