mod decompose;
mod decsym;
mod overflow;
mod render;
mod spec;

pub use decompose::{decompose, Decomposed, Sign};
pub use decsym::{dec_sym_add, dec_sym_combine, dec_sym_strip};
pub use overflow::{check, precision_capacity};
pub use render::SexaFormatter;
pub use spec::{Flags, FormatSpec, Precision, Verb};
