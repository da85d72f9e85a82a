// Resume generation: prompt assembly, the completion call, and writing the result.
// All provider calls go through llm_client.

pub mod generator;
pub mod prompt;
pub mod writer;
