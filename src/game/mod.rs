pub mod choices;
pub mod state;
pub mod token;

pub use choices::model_choices;
pub use state::{GameState, GuessResult};
pub use token::{DisplayedToken, Outcome};
