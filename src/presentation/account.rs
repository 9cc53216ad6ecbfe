/******************************************************************************
   Author: Daniel J. Umpierrez
   Date: 15/10/26
******************************************************************************/

use crate::application::services::types::{
    BalanceEntry, BalanceReport, CostReport, ProfitReport, StopLossReport,
};
use crate::error::AppError;
use crate::presentation::output::{
    OutputFormat, Summary, Tabular, fmt_num, fmt_opt, render,
};

/// Decimals of balances and prices
const DECIMALS: usize = 8;

impl Tabular for CostReport {
    fn headers() -> Vec<&'static str> {
        vec!["Symbol", "WAvg. Cost", "Amount"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.symbol.clone(),
            fmt_num(self.cost, DECIMALS),
            fmt_num(self.quantity, DECIMALS),
        ]
    }
}

impl Summary for CostReport {
    fn summary_line(&self) -> String {
        format!("[{}] WAvg. Cost: {:12.8}", self.symbol, self.cost)
    }
}

impl Tabular for StopLossReport {
    fn headers() -> Vec<&'static str> {
        vec!["Symbol", "Cost", "ATR", "Factor", "StopLoss"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.symbol.clone(),
            fmt_num(self.reference, DECIMALS),
            fmt_num(self.atr, DECIMALS),
            fmt_num(self.factor, 2),
            fmt_num(self.stop_loss, DECIMALS),
        ]
    }
}

impl Summary for StopLossReport {
    fn summary_line(&self) -> String {
        format!(
            "[{:<9}] Cost: {:12.8}, StopLoss: {:12.8}",
            self.symbol, self.reference, self.stop_loss
        )
    }
}

impl Tabular for ProfitReport {
    fn headers() -> Vec<&'static str> {
        vec!["Coin", "Quote", "Amount", "Cost", "Last", "Profit", "Percent"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.coin.clone(),
            self.quote.clone(),
            fmt_num(self.quantity, DECIMALS),
            fmt_num(self.cost, DECIMALS),
            fmt_num(self.last, DECIMALS),
            format!("{:+.8}", self.profit),
            format!("{:+.2}", self.percent),
        ]
    }
}

impl Summary for ProfitReport {
    fn summary_line(&self) -> String {
        format!(
            "[{}] Profit: {:+10.8}, Cost:  {:10.8}",
            self.coin, self.profit, self.cost
        )
    }
}

impl Tabular for BalanceEntry {
    fn headers() -> Vec<&'static str> {
        vec!["Coin", "Free", "Used", "Total"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.coin.clone(),
            fmt_num(self.free, DECIMALS),
            fmt_num(self.used, DECIMALS),
            fmt_num(self.total, DECIMALS),
        ]
    }
}

/// Renders the wallet, the detailed view adds a BTC column and a total row
pub fn render_balance(report: &BalanceReport, format: OutputFormat) -> Result<String, AppError> {
    let Some(total_btc) = report.total_btc else {
        let cells: Vec<Vec<String>> = report.entries.iter().map(BalanceEntry::row).collect();
        return render(&BalanceEntry::headers(), &cells, &report.entries, format);
    };

    let mut headers = BalanceEntry::headers();
    headers.push("BTC Value");

    let mut cells: Vec<Vec<String>> = report
        .entries
        .iter()
        .map(|entry| {
            let mut row = entry.row();
            row.push(fmt_opt(entry.btc_value, DECIMALS));
            row
        })
        .collect();
    cells.push(vec![
        "Total".to_string(),
        String::new(),
        String::new(),
        String::new(),
        fmt_num(total_btc, DECIMALS),
    ]);

    render(&headers, &cells, report, format)
}
