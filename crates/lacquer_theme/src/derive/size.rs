//! Size scale derivation
//!
//! Sizes are `sizeUnit * (sizeStep + offset)` ladders. The compact
//! variant rebuilds the ladder with `sizeStep - 2`, halving at the very
//! small end so every entry stays positive and strictly below its
//! default-scale counterpart.

use crate::error::ThemeError;
use crate::map::TokenMap;
use crate::seed::SeedToken;
use crate::tokens;

pub(crate) fn size_map_token(seed: &SeedToken) -> Result<TokenMap, ThemeError> {
    let unit = seed.size_unit;
    let step = seed.size_step;
    Ok(tokens! {
        "sizeXXL" => unit * (step + 8.0),
        "sizeXL" => unit * (step + 4.0),
        "sizeLG" => unit * (step + 2.0),
        "sizeMD" => unit * (step + 1.0),
        "sizeMS" => unit * step,
        "size" => unit * step,
        "sizeSM" => unit * (step - 1.0),
        "sizeXS" => unit * (step - 2.0),
        "sizeXXS" => unit * (step - 3.0),
    })
}

pub(crate) fn compact_size_map_token(seed: &SeedToken) -> Result<TokenMap, ThemeError> {
    let unit = seed.size_unit;
    let step = seed.size_step - 2.0;
    Ok(tokens! {
        "sizeXXL" => unit * (step + 8.0),
        "sizeXL" => unit * (step + 4.0),
        "sizeLG" => unit * (step + 2.0),
        "sizeMD" => unit * (step + 1.0),
        "sizeMS" => unit * step,
        "size" => unit * step,
        "sizeSM" => unit * (step - 1.0),
        "sizeXS" => unit * (step - 1.0),
        "sizeXXS" => unit * (step - 1.0) / 2.0,
    })
}
