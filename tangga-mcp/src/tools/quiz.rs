//! Quiz session tools
//!
//! Sessions are created by `quiz_start` and addressed by id afterwards.

use serde_json::{json, Value as JsonValue};
use tangga_quiz::QuizSession;
use tracing::info;
use crate::error::ToolError;
use crate::plugin::{ArgMeta, Tool, ToolContext, ToolMeta};
use crate::render::{grade_feedback, problem_prompt};
use super::helpers::{extract_number, extract_optional_domain, extract_text};

fn session_view(id: &str, session: &QuizSession) -> JsonValue {
    json!({
        "session": id,
        "problem": session.problem(),
        "prompt": problem_prompt(session.problem()),
        "score": session.score(),
        "phase": session.phase()
    })
}

static SESSION_ARG: [ArgMeta; 1] = [
    ArgMeta::required("session", "string", "Session id returned by quiz_start"),
];

// ============ quiz_start ============

pub struct QuizStart;

impl Tool for QuizStart {
    fn meta(&self) -> ToolMeta {
        ToolMeta {
            name: "quiz_start",
            description: "Start a quiz session (first problem: 5 km to m, score 0)",
            args: &[],
        }
    }

    fn call(&self, _args: &JsonValue, ctx: &mut ToolContext) -> Result<JsonValue, ToolError> {
        let session = ctx.engine.new_session();
        let id = ctx.sessions.insert(session.clone());
        info!(session = %id, live = ctx.sessions.len(), "quiz session started");

        let mut view = session_view(&id, &session);
        view["content"] = json!([{ "type": "text", "text": problem_prompt(session.problem()) }]);
        Ok(view)
    }
}

// ============ quiz_problem ============

pub struct QuizProblemTool;

impl Tool for QuizProblemTool {
    fn meta(&self) -> ToolMeta {
        ToolMeta {
            name: "quiz_problem",
            description: "Show the current problem, score and phase of a session",
            args: &SESSION_ARG,
        }
    }

    fn call(&self, args: &JsonValue, ctx: &mut ToolContext) -> Result<JsonValue, ToolError> {
        let id = extract_text(args, "quiz_problem", "session")?;
        let session = ctx.sessions.get(id)?;

        let mut view = session_view(id, session);
        view["content"] = json!([{
            "type": "text",
            "text": format!("{} (score: {})", problem_prompt(session.problem()), session.score())
        }]);
        Ok(view)
    }
}

// ============ quiz_answer ============

pub struct QuizAnswer;

static QUIZ_ANSWER_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("session", "string", "Session id returned by quiz_start"),
    ArgMeta::required("answer", "number", "The learner's answer in the target unit"),
];

impl Tool for QuizAnswer {
    fn meta(&self) -> ToolMeta {
        ToolMeta {
            name: "quiz_answer",
            description: "Grade an answer; a correct answer adds 10 points",
            args: &QUIZ_ANSWER_ARGS,
        }
    }

    fn call(&self, args: &JsonValue, ctx: &mut ToolContext) -> Result<JsonValue, ToolError> {
        let id = extract_text(args, "quiz_answer", "session")?;
        let answer = extract_number(args, "quiz_answer", "answer")?;
        let decimals = ctx.config.decimals;

        let session = ctx.sessions.get_mut(id)?;
        let grade = ctx.engine.submit_answer(session, answer);
        let feedback = grade_feedback(session.problem(), &grade, decimals);

        Ok(json!({
            "content": [{ "type": "text", "text": feedback }],
            "correct": grade.correct,
            "expected": grade.expected,
            "score": session.score(),
            "phase": session.phase()
        }))
    }
}

// ============ quiz_next ============

pub struct QuizNext;

static QUIZ_NEXT_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("session", "string", "Session id returned by quiz_start"),
    ArgMeta::optional("domain", "string", "\"length\" or \"mass\"; random when omitted"),
];

impl Tool for QuizNext {
    fn meta(&self) -> ToolMeta {
        ToolMeta {
            name: "quiz_next",
            description: "Move a session on to a new random problem, keeping the score",
            args: &QUIZ_NEXT_ARGS,
        }
    }

    fn call(&self, args: &JsonValue, ctx: &mut ToolContext) -> Result<JsonValue, ToolError> {
        let id = extract_text(args, "quiz_next", "session")?;
        let domain = extract_optional_domain(args, "quiz_next", "domain")?;

        let session = ctx.sessions.get_mut(id)?;
        ctx.engine.next_problem(session, domain);

        let mut view = session_view(id, session);
        view["content"] = json!([{ "type": "text", "text": problem_prompt(session.problem()) }]);
        Ok(view)
    }
}

// ============ quiz_end ============

pub struct QuizEnd;

impl Tool for QuizEnd {
    fn meta(&self) -> ToolMeta {
        ToolMeta {
            name: "quiz_end",
            description: "End a session and report its final score",
            args: &SESSION_ARG,
        }
    }

    fn call(&self, args: &JsonValue, ctx: &mut ToolContext) -> Result<JsonValue, ToolError> {
        let id = extract_text(args, "quiz_end", "session")?;
        let session = ctx.sessions.remove(id)?;
        info!(session = %id, score = session.score(), "quiz session ended");

        Ok(json!({
            "content": [{ "type": "text", "text": format!("Final score: {}", session.score()) }],
            "session": id,
            "score": session.score()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;

    fn ctx() -> ToolContext {
        ToolContext::new(ServerConfig { seed: Some(11), ..ServerConfig::default() })
    }

    fn start(ctx: &mut ToolContext) -> String {
        let out = QuizStart.call(&json!({}), ctx).unwrap();
        out["session"].as_str().unwrap().to_string()
    }

    #[test]
    fn test_start_shows_default_problem() {
        let mut ctx = ctx();
        let out = QuizStart.call(&json!({}), &mut ctx).unwrap();
        assert_eq!(out["prompt"], "What is 5 km in m?");
        assert_eq!(out["score"], 0);
        assert_eq!(out["phase"], "awaiting_answer");
        assert_eq!(out["problem"]["source"], "km");
    }

    #[test]
    fn test_answer_and_resubmit() {
        let mut ctx = ctx();
        let id = start(&mut ctx);
        for expected_score in [10, 20, 30] {
            let out = QuizAnswer.call(&json!({"session": id, "answer": 5000}), &mut ctx).unwrap();
            assert_eq!(out["correct"], true);
            assert_eq!(out["score"], expected_score);
        }

        let out = QuizAnswer.call(&json!({"session": id, "answer": "5000.001"}), &mut ctx).unwrap();
        assert_eq!(out["correct"], false);
        assert_eq!(out["score"], 30);
        assert_eq!(out["content"][0]["text"], "Not quite. The correct answer is 5,000.0000 m.");
    }

    #[test]
    fn test_next_keeps_score_and_honours_domain() {
        let mut ctx = ctx();
        let id = start(&mut ctx);
        QuizAnswer.call(&json!({"session": id, "answer": 5000}), &mut ctx).unwrap();

        let out = QuizNext.call(&json!({"session": id, "domain": "mass"}), &mut ctx).unwrap();
        assert_eq!(out["score"], 10);
        assert_eq!(out["problem"]["domain"], "mass");
        assert_ne!(out["problem"]["source"], out["problem"]["target"]);

        let shown = QuizProblemTool.call(&json!({"session": id}), &mut ctx).unwrap();
        assert_eq!(shown["problem"], out["problem"]);
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut ctx = ctx();
        let a = start(&mut ctx);
        let b = start(&mut ctx);
        QuizAnswer.call(&json!({"session": a, "answer": 5000}), &mut ctx).unwrap();

        let out_b = QuizProblemTool.call(&json!({"session": b}), &mut ctx).unwrap();
        assert_eq!(out_b["score"], 0);
    }

    #[test]
    fn test_end_removes_session() {
        let mut ctx = ctx();
        let id = start(&mut ctx);
        let out = QuizEnd.call(&json!({"session": id}), &mut ctx).unwrap();
        assert_eq!(out["score"], 0);

        let err = QuizProblemTool.call(&json!({"session": id}), &mut ctx).unwrap_err();
        assert_eq!(err.code, "UNKNOWN_SESSION");
    }

    #[test]
    fn test_abandoned_sessions_are_evicted() {
        let mut ctx = ToolContext::new(ServerConfig { seed: Some(11), max_sessions: 2, ..ServerConfig::default() });
        let first = start(&mut ctx);
        let second = start(&mut ctx);
        let third = start(&mut ctx);

        assert_eq!(ctx.sessions.len(), 2);
        let err = QuizProblemTool.call(&json!({"session": first}), &mut ctx).unwrap_err();
        assert_eq!(err.code, "UNKNOWN_SESSION");
        assert!(QuizProblemTool.call(&json!({"session": second}), &mut ctx).is_ok());
        assert!(QuizProblemTool.call(&json!({"session": third}), &mut ctx).is_ok());
    }
}
