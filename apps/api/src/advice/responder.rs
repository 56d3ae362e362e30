//! Advice Responder: canned career answers keyed by substring.

/// (keyword phrase, answer). First match wins, so order is significant.
const FAQ: &[(&str, &str)] = &[
    (
        "frontend developer",
        "A Frontend Developer builds the UI of websites or apps. Skills: HTML, CSS, JavaScript, React, UI/UX design.",
    ),
    (
        "backend developer",
        "A Backend Developer works on server-side logic, databases, and APIs. Skills: Python, Node.js, Java, SQL, REST APIs.",
    ),
    (
        "fullstack developer",
        "A Fullstack Developer handles both frontend and backend development. Skills: HTML, CSS, JS, React, Python/Node, SQL/NoSQL.",
    ),
    (
        "improve skills",
        "You can improve your skills by taking online courses, building projects, and practicing coding challenges.",
    ),
    (
        "resume",
        "Make sure your resume is concise, highlights your key skills, and matches the job requirements.",
    ),
];

pub const FALLBACK_ANSWER: &str =
    "Keep learning and practicing! Focus on the skills required for your desired job.";

/// Returns the answer for the first keyword phrase found in the lowercased question,
/// or `FALLBACK_ANSWER` when none occurs.
pub fn get_answer(question: &str) -> &'static str {
    let question = question.to_lowercase();
    FAQ.iter()
        .find(|(keyword, _)| question.contains(keyword))
        .map(|(_, answer)| *answer)
        .unwrap_or(FALLBACK_ANSWER)
}
