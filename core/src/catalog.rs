//! Fixed catalogues the two tables are shaped around.
//!
//! The series table carries one row per parameter below its short-label
//! row; the summary table carries one row per risk category, a blank
//! separator, and a trailing composite row. Renderer-facing metrics are
//! addressed by the documented row offsets below — the offsets index
//! [`PARAMETERS`], and [`SeriesTable::metric`](crate::table::SeriesTable::metric)
//! applies the +1 shift past the short-label row.

use crate::types::RowIndex;
use serde::{Deserialize, Serialize};

/// Ordered parameter catalogue for the series table.
pub const PARAMETERS: [&str; 144] = [
    "Aset Investasi",
    "Deposito Berjangka",
    "Obligasi Korporasi",
    "Surat Berharga yang Diterbitkan oleh Negara RI",
    "Reksa Dana",
    "Kas dan Bank",
    "Piutang Premi",
    "Piutang Reasuransi",
    "Piutang Lain-lain",
    "Jumlah Aset",
    "Liabilitas Reasuransi",
    "Hutang Klaim",
    "Hutang Komisi",
    "Hutang Lain-lain",
    "Jumlah Utang",
    "Jumlah Ekuitas",
    "Premi Bruto (All)",
    "Premi Bruto (Life)",
    "Premi Bruto (Non-Life)",
    "Premi Bruto (Health)",
    "Premi Reasuransi (All)",
    "Premi Reasuransi (Life)",
    "Premi Reasuransi (Non-Life)",
    "Premi Reasuransi (Health)",
    "Jumlah Pendapatan",
    "Klaim Bruto (All)",
    "Klaim Bruto (Life)",
    "Klaim Bruto (Non-Life)",
    "Klaim Bruto (Health)",
    "Klaim Reasuransi (All)",
    "Klaim Reasuransi (Life)",
    "Klaim Reasuransi (Non-Life)",
    "Klaim Reasuransi (Health)",
    "Beban Komisi (All)",
    "Beban Komisi (Life)",
    "Beban Komisi (Non-Life)",
    "Beban Komisi (Health)",
    "Beban Operasional",
    "Beban Underwriting Lain",
    "Pendapatan Investasi",
    "Beban Investasi",
    "Laba (Rugi) Underwriting",
    "Total Laba (Rugi) Komprehensif",
    "Laba (Rugi) Lainnya",
    "Modal Saham",
    "Agio Saham",
    "Cadangan Umum",
    "Laba (Rugi) Belum Direalisasi",
    "Saldo Laba",
    "Rasio Solvabilitas",
    "RBC",
    "Likuiditas",
    "Rasio Beban Operasional",
    "Rasio Beban Klaim",
    "Loss Ratio (All)",
    "Loss Ratio (Life)",
    "Loss Ratio (Non-Life)",
    "Loss Ratio (Health)",
    "Expense Ratio (All)",
    "Expense Ratio (Life)",
    "Expense Ratio (Non-Life)",
    "Expense Ratio (Health)",
    "Combined Ratio (All)",
    "Combined Ratio (Life)",
    "Combined Ratio (Non-Life)",
    "Combined Ratio (Health)",
    "ROA",
    "ROE",
    "NPM",
    "Debt to Equity Ratio",
    "Asset Turnover",
    "Equity Multiplier",
    "Investment Return",
    "Premium Growth Rate",
    "Claim Growth Rate",
    "Operating Expense Growth Rate",
    "Retention Ratio (All)",
    "Retention Ratio (Life)",
    "Retention Ratio (Non-Life)",
    "Retention Ratio (Health)",
    "Reinsurance Ratio (All)",
    "Reinsurance Ratio (Life)",
    "Reinsurance Ratio (Non-Life)",
    "Reinsurance Ratio (Health)",
    "Premium to Surplus Ratio",
    "Reserve to Premium Ratio",
    "Investment Yield",
    "Cash Flow from Operations",
    "Cash Flow from Investments",
    "Cash Flow from Financing",
    "Net Cash Flow",
    "Receivables Turnover",
    "Days Sales Outstanding",
    "Payables Turnover",
    "Days Payable Outstanding",
    "Working Capital",
    "Current Ratio",
    "Quick Ratio",
    "Asset Quality Ratio",
    "Non-Performing Assets Ratio",
    "Capital Adequacy Ratio",
    "Tier 1 Capital Ratio",
    "Tier 2 Capital Ratio",
    "Leverage Ratio",
    "Jumlah Karyawan",
    "Jumlah Agen",
    "Jumlah Kantor Cabang",
    "Jumlah Produk",
    "Market Share (Life)",
    "Market Share (Non-Life)",
    "Market Share (Health)",
    "Customer Satisfaction Index",
    "Net Promoter Score",
    "Employee Satisfaction Index",
    "Training Hours per Employee",
    "IT Investment Ratio",
    "Digital Channel Usage",
    "Mobile App Downloads",
    "Online Premium Ratio",
    "Jumlah Polis",
    "Jumlah Fraud",
    "Jumlah Komplain",
    "Komplain Resolution Rate",
    "Average Claim Settlement Days",
    "Underwriting Profit Margin",
    "Investment Portfolio Diversity",
    "Alternative Investment Ratio",
    "Real Estate Investment Ratio",
    "Equity Investment Ratio",
    "Fixed Income Investment Ratio",
    "Government Bond Ratio",
    "Corporate Bond Ratio",
    "Jumlah Gugatan",
    "Jumlah Nominal Gugatan Yang Sedang Diajukan",
    "Jumlah Pelanggaran Atas Ketentuan",
    "Jumlah Pelanggaran Atas Ketentuan Yang Belum Diselesaikan",
    "Jumlah Pelanggaran Atas Ketentuan Yang Sudah Diselesaikan",
    "Jumlah Denda",
    "Jumlah Denda Yang Belum Dibayar",
    "Jumlah Pengaduan",
    "Jumlah Pengaduan Yang Belum Ditindak Lanjuti",
    "Indak Lanjut Pengaduan",
    "Jumlah Pemberitaan Negatif",
    "Jumlah Pemberitaan Negatif Dalam 1 Tahun",
];

// Row offsets the renderer reads. Keep in sync with PARAMETERS order.
pub const PARAM_INVESTMENT_ASSETS: RowIndex = 0;
pub const PARAM_CASH_AND_BANK: RowIndex = 5;
pub const PARAM_TOTAL_ASSETS: RowIndex = 9;
pub const PARAM_TOTAL_LIABILITIES: RowIndex = 14;
pub const PARAM_TOTAL_EQUITY: RowIndex = 15;
pub const PARAM_GROSS_PREMIUM: RowIndex = 16;
pub const PARAM_TOTAL_INCOME: RowIndex = 24;
pub const PARAM_GROSS_CLAIMS: RowIndex = 25;
pub const PARAM_COMPREHENSIVE_PROFIT: RowIndex = 42;
pub const PARAM_RBC: RowIndex = 50;
pub const PARAM_POLICY_COUNT: RowIndex = 119;
pub const PARAM_FRAUD_COUNT: RowIndex = 120;
pub const PARAM_LAWSUIT_COUNT: RowIndex = 132;
pub const PARAM_LAWSUIT_AMOUNT: RowIndex = 133;
pub const PARAM_VIOLATION_COUNT: RowIndex = 134;
pub const PARAM_PENALTY_TOTAL: RowIndex = 137;
pub const PARAM_COMPLAINT_COUNT: RowIndex = 139;
pub const PARAM_COMPLAINT_FOLLOWUP: RowIndex = 141;
pub const PARAM_NEGATIVE_NEWS_YEAR: RowIndex = 143;

/// Ordered risk-category catalogue for the summary table.
pub const RISK_CATEGORIES: [&str; 9] = [
    "Risiko Strategis",
    "Risiko Operasional",
    "Risiko Pasar",
    "Risiko Kredit",
    "Risiko Likuiditas",
    "Risiko Hukum",
    "Risiko Reputasi",
    "Risiko Teknologi Informasi",
    "Risiko Underwriting",
];

pub const RISK_CATEGORY_COUNT: usize = RISK_CATEGORIES.len();

/// Blank separator row between the categories and the composite row.
pub const SEPARATOR_ROW: RowIndex = 9;

/// Row holding the arithmetic mean of the nine category scores.
pub const COMPOSITE_ROW: RowIndex = 10;

pub const COMPOSITE_LABEL: &str = "Composite Score";

/// Weight applied to a raw score to produce the weighted column.
pub const SCORE_WEIGHT: f64 = 0.8;

/// Classification band stored in a period's classification column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    Low,
    Moderate,
    High,
}

impl RiskBand {
    pub fn from_score(score: f64) -> Self {
        if score > 3.5 {
            RiskBand::High
        } else if score > 2.5 {
            RiskBand::Moderate
        } else {
            RiskBand::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskBand::Low => "Low",
            RiskBand::Moderate => "Moderate",
            RiskBand::High => "High",
        }
    }
}
