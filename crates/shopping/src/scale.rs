use gastronomia_shared::Ingredient;

pub const MIN_SERVINGS: u32 = 1;
pub const MAX_SERVINGS: u32 = 20;

/// Clamp a target serving count to the supported range.
pub fn clamp_servings(value: u32) -> u32 {
    value.clamp(MIN_SERVINGS, MAX_SERVINGS)
}

/// Rescale ingredient amounts from one serving count to another.
///
/// Ids, names, units, and order are preserved; only amounts change, by the
/// real-valued factor `to_servings / from_servings`. Both counts must be
/// positive. Callers clamp the target with [`clamp_servings`] before
/// calling; this function does not validate.
pub fn scale(ingredients: &[Ingredient], from_servings: u32, to_servings: u32) -> Vec<Ingredient> {
    let factor = f64::from(to_servings) / f64::from(from_servings);

    ingredients
        .iter()
        .map(|ingredient| Ingredient {
            amount: ingredient.amount * factor,
            ..ingredient.clone()
        })
        .collect()
}
