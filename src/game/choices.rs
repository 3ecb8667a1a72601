use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::input::StepPredictions;

/// Multiple-choice options for casual mode.
///
/// Takes the primary model's top `count` tokens, makes sure `target` is among
/// them (it replaces the least likely one when missing) and shuffles with a
/// seeded RNG so the same step always shows the same order.
pub fn model_choices(
    predictions: Option<&StepPredictions>,
    target: &str,
    count: usize,
    seed: u64,
) -> Vec<String> {
    let Some(primary) = predictions.and_then(StepPredictions::primary) else {
        return Vec::new();
    };
    if count == 0 {
        return Vec::new();
    }

    let mut choices: Vec<String> = primary
        .items
        .iter()
        .take(count)
        .map(|item| item.token.clone())
        .collect();

    if !choices.iter().any(|c| c == target) {
        if choices.len() == count {
            choices.pop();
        }
        choices.push(target.to_string());
    }

    let mut rng = StdRng::seed_from_u64(seed);
    choices.shuffle(&mut rng);
    choices
}
