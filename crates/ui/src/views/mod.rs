mod game;
mod summary;
mod welcome;

pub use game::GameView;
pub use summary::SummaryScreen;
pub use welcome::WelcomeView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
