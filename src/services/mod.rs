/// Meeting time conversion and suitability classification
pub mod calculator;
/// Injectable date providers
pub mod clock;
