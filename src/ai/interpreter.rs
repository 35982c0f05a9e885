//! Free-text entry interpretation
//!
//! Turns something like "午饭牛肉面 30" into amount, direction, category and
//! summary by asking the model for JSON that matches a fixed schema. Any
//! failure fails the whole call; nothing is guessed or defaulted.

use serde::Deserialize;
use serde_json::{json, Value};

use super::{GenerationRequest, GenerativeModel};
use crate::error::{ScribeError, ScribeResult};
use crate::models::{Money, ParsedEntry, TransactionType};

/// Reply shape; every field is required
#[derive(Debug, Deserialize)]
struct Reply {
    amount: f64,
    #[serde(rename = "type")]
    kind: TransactionType,
    category: String,
    summary: String,
}

/// Output schema declared to the model
pub fn entry_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "amount": {
                "type": "NUMBER",
                "description": "Transaction amount as a positive number."
            },
            "type": {
                "type": "STRING",
                "enum": ["INCOME", "EXPENSE"],
                "description": "Whether money came in or went out."
            },
            "category": {
                "type": "STRING",
                "description": "Top-level category such as 餐饮, 交通, 购物, 居住, 娱乐, 医疗, 工资, 理财. Keep it to 2-4 characters."
            },
            "summary": {
                "type": "STRING",
                "description": "Short description of the item, e.g. 牛肉面 or 地铁卡充值."
            }
        },
        "required": ["amount", "type", "category", "summary"]
    })
}

fn entry_prompt(input: &str) -> String {
    format!(
        "请把下面这条记账内容整理成结构化数据：\"{}\"\n\
         1. 提取金额（只要数字，不带符号）。\n\
         2. 判断是收入(INCOME)还是支出(EXPENSE)。\n\
         3. 给出一个统一的一级分类，例如餐饮、交通、购物、居住、娱乐、医疗、教育、人情、工资、奖金、理财。\n\
         4. 写一个简短的具体摘要。\n\
         未注明货币时按人民币处理。只返回 JSON。",
        input
    )
}

/// Interpret one free-text entry
///
/// # Errors
///
/// - `Validation` if `input` is blank
/// - `Ai` if the service can't be reached or rejects the request
/// - `Interpretation` if the reply is empty or not the declared shape
pub fn interpret(model: &dyn GenerativeModel, input: &str) -> ScribeResult<ParsedEntry> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ScribeError::Validation("Entry text is empty".into()));
    }

    let request = GenerationRequest::structured(entry_prompt(input), entry_schema());
    let reply = model
        .generate(&request)?
        .ok_or_else(|| ScribeError::Interpretation("The model returned no content".into()))?;

    decode_reply(&reply)
}

fn decode_reply(reply: &str) -> ScribeResult<ParsedEntry> {
    let reply: Reply = serde_json::from_str(strip_code_fence(reply))
        .map_err(|e| ScribeError::Interpretation(format!("Unexpected reply shape: {}", e)))?;

    let amount = Money::from_major(reply.amount)
        .filter(|m| !m.is_negative())
        .ok_or_else(|| {
            ScribeError::Interpretation(format!(
                "Amount must be between 0 and {}, got {}",
                Money::MAX_MAJOR,
                reply.amount
            ))
        })?;

    let category = reply.category.trim();
    let summary = reply.summary.trim();
    if category.is_empty() || summary.is_empty() {
        return Err(ScribeError::Interpretation(
            "Category and summary must not be empty".into(),
        ));
    }

    Ok(ParsedEntry {
        amount,
        kind: reply.kind,
        category: category.to_string(),
        summary: summary.to_string(),
    })
}

/// Drop a surrounding Markdown code fence, if the model added one
fn strip_code_fence(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
