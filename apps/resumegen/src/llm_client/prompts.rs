// Fixed instruction texts for resume generation.
// The user-data messages are assembled in generation::prompt.

/// System message describing the task.
pub const RESUME_SYSTEM: &str = "I will give you my details, resume format, and job description. \
    Please generate a resume in the given LaTeX format for the given job description with my details.";

pub const DETAILS_PREFIX: &str = "Here are the details: ";
pub const FORMAT_PREFIX: &str = "Here is the resume format: ";
pub const JOB_DESCRIPTION_PREFIX: &str = "Here is the job description: ";

/// Final user message. The response is written to disk as-is, so the model
/// must not wrap it in fences or add commentary.
pub const LATEX_ONLY_INSTRUCTION: &str = "Now, using all of the above data, generate my resume in LaTeX. \
    Respond with the LaTeX source only. \
    Your response is consumed by an automated process that only understands LaTeX code \
    and cannot evaluate or clean up the resume. \
    Do NOT wrap the output in ``` or any other code fence. \
    Do NOT add any preamble such as 'Here is your LaTeX code' or any explanation.";
