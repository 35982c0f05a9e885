//! Narrative report over recent records
//!
//! Unlike entry interpretation this never fails: any problem talking to the
//! model turns into a fixed message the user can read.

use tracing::warn;

use super::{GenerationRequest, GenerativeModel};
use crate::models::Transaction;

/// Shown when the service can't be reached
pub const REPORT_FALLBACK: &str = "暂时无法生成分析报告，请稍后再试。";

/// Shown when the service answers with nothing
pub const REPORT_EMPTY: &str = "暂无分析数据。";

/// One line per record: `2025-03-14: EXPENSE 30.00 (餐饮 - 牛肉面)`
pub fn digest(transactions: &[Transaction]) -> String {
    transactions
        .iter()
        .map(|t| {
            format!(
                "{}: {} {} ({} - {})",
                t.date.format("%Y-%m-%d"),
                t.kind,
                t.amount,
                t.category,
                t.summary
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn report_prompt(digest: &str, period: &str) -> String {
    format!(
        "你是一位专业的私人财务顾问，请分析以下{period}的收支记录：\n\n\
         {digest}\n\n\
         请写一份简洁、有洞察力的财务简报：\n\
         1. **资金流向**：概述收入与支出。\n\
         2. **消费洞察**：点出主要支出的一级分类和消费习惯。\n\
         3. **理财建议**：给一句温暖而理性的建议。\n\n\
         风格清新、专业、有温度。控制在 250 字以内，使用 Markdown，重点数据加粗。"
    )
}

/// Ask the model for a short narrative about `transactions`
///
/// The caller decides how many records to pass (typically the most recent
/// `report_window`). Always returns readable text.
pub fn generate_report(
    model: &dyn GenerativeModel,
    transactions: &[Transaction],
    period: &str,
) -> String {
    let request = GenerationRequest::text(report_prompt(&digest(transactions), period));

    match model.generate(&request) {
        Ok(Some(text)) if !text.trim().is_empty() => text,
        Ok(_) => REPORT_EMPTY.to_string(),
        Err(e) => {
            warn!(error = %e, "report generation failed, using fallback");
            REPORT_FALLBACK.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::testing::ScriptedModel;
    use crate::models::{Money, ParsedEntry, TransactionType};
    use chrono::{TimeZone, Utc};

    fn record(kind: TransactionType, minor: i64, category: &str, summary: &str) -> Transaction {
        Transaction::at(
            summary,
            ParsedEntry {
                amount: Money::from_minor(minor),
                kind,
                category: category.to_string(),
                summary: summary.to_string(),
            },
            "CNY",
            Utc.with_ymd_and_hms(2025, 3, 14, 8, 0, 0).unwrap(),
        )
    }

    fn sample() -> Vec<Transaction> {
        vec![
            record(TransactionType::Expense, 3000, "餐饮", "牛肉面"),
            record(TransactionType::Income, 100000, "工资", "兼职"),
        ]
    }

    #[test]
    fn test_digest_lines() {
        assert_eq!(
            digest(&sample()),
            "2025-03-14: EXPENSE 30.00 (餐饮 - 牛肉面)\n2025-03-14: INCOME 1000.00 (工资 - 兼职)"
        );
    }

    #[test]
    fn test_report_passes_through_text() {
        let model = ScriptedModel::replying("本月**支出 30 元**。");
        let report = generate_report(&model, &sample(), "本月");

        assert_eq!(report, "本月**支出 30 元**。");
        let request = model.last_request().unwrap();
        assert!(request.response_schema.is_none());
        assert!(request.prompt.contains("本月"));
        assert!(request.prompt.contains("EXPENSE 30.00 (餐饮 - 牛肉面)"));
    }

    #[test]
    fn test_transport_failure_returns_fallback() {
        let model = ScriptedModel::failing("timeout");
        assert_eq!(generate_report(&model, &sample(), "本月"), REPORT_FALLBACK);
    }

    #[test]
    fn test_empty_reply_returns_fixed_text() {
        let model = ScriptedModel::new();
        model.push(Ok(None));
        assert_eq!(generate_report(&model, &sample(), "本月"), REPORT_EMPTY);

        let model = ScriptedModel::replying("  \n ");
        assert_eq!(generate_report(&model, &sample(), "本月"), REPORT_EMPTY);
    }
}
