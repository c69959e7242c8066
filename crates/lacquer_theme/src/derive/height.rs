//! Control height derivation

use crate::error::ThemeError;
use crate::map::TokenMap;
use crate::tokens;

pub(crate) fn control_height_map_token(control_height: f64) -> Result<TokenMap, ThemeError> {
    Ok(tokens! {
        "controlHeightSM" => control_height * 0.75,
        "controlHeightXS" => control_height * 0.5,
        "controlHeightLG" => control_height * 1.25,
    })
}
