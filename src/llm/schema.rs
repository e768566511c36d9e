use serde_json::{json, Value};

use crate::report::normalizer::CANONICAL_AXES;

/// A named strict output schema as the model API expects it.
pub struct OutputSchema {
    pub name: &'static str,
    pub schema: Value,
}

fn insight_items() -> Value {
    json!({
        "type": "array",
        "items": {
            "type": "object",
            "properties": {
                "title": { "type": "string" },
                "detail": { "type": "string" },
                "severity": { "type": "string", "enum": ["low", "medium", "high"] }
            },
            "required": ["title", "detail", "severity"],
            "additionalProperties": false
        }
    })
}

pub fn analysis_schema() -> OutputSchema {
    let schema = json!({
        "type": "object",
        "properties": {
            "summary": { "type": "string" },
            "developer_type": { "type": "string" },
            "strengths": insight_items(),
            "growth_areas": insight_items(),
            "radar": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "axis": { "type": "string", "enum": CANONICAL_AXES },
                        "score": { "type": "integer", "minimum": 0, "maximum": 100 }
                    },
                    "required": ["axis", "score"],
                    "additionalProperties": false
                }
            },
            "radar_breakdown": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "axis": { "type": "string", "enum": CANONICAL_AXES },
                        "score": { "type": "integer", "minimum": 0, "maximum": 100 },
                        "note": { "type": "string" }
                    },
                    "required": ["axis", "score", "note"],
                    "additionalProperties": false
                }
            },
            "top_repositories": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "highlight": { "type": "string" }
                    },
                    "required": ["name", "highlight"],
                    "additionalProperties": false
                }
            }
        },
        "required": [
            "summary", "developer_type", "strengths", "growth_areas",
            "radar", "radar_breakdown", "top_repositories"
        ],
        "additionalProperties": false
    });

    OutputSchema {
        name: "profile_analysis",
        schema,
    }
}

pub fn advice_schema() -> OutputSchema {
    let schema = json!({
        "type": "object",
        "properties": {
            "summary": { "type": "string" },
            "recommendations": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "title": { "type": "string" },
                        "detail": { "type": "string" },
                        "difficulty": {
                            "type": "string",
                            "enum": ["beginner", "intermediate", "advanced"]
                        },
                        "priority": { "type": "string", "enum": ["low", "medium", "high"] },
                        "related_repositories": {
                            "type": "array",
                            "items": { "type": "string" }
                        }
                    },
                    "required": [
                        "title", "detail", "difficulty", "priority", "related_repositories"
                    ],
                    "additionalProperties": false
                }
            }
        },
        "required": ["summary", "recommendations"],
        "additionalProperties": false
    });

    OutputSchema {
        name: "profile_advice",
        schema,
    }
}
