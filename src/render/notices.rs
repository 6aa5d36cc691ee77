//! Notices
//!
//! Project disclaimer and the report download notice.

use crate::esg::Report;

/// Disclaimer shown until the user accepts it
pub const DISCLAIMER: &str = "\
+------------------------------------------------------------------+
| ! Project Disclaimer                                             |
+------------------------------------------------------------------+
| Educational Project                                              |
|   This dashboard was built as an educational demonstration.      |
|                                                                  |
| About GreenAuto S.p.A.                                           |
|   GreenAuto S.p.A. is a fictional Italian automotive company.    |
|   The company profile, ESG data and sustainability reports are   |
|   simulated.                                                     |
|                                                                  |
| Data Sources                                                     |
|   Figures follow publicly available ESG reporting patterns and   |
|   methodologies of large automotive groups, adapted for the      |
|   fictional GreenAuto S.p.A. context.                            |
|                                                                  |
| Legal Notice                                                     |
|   - Not affiliated with any real automotive company              |
|   - For educational purposes only, not for commercial use        |
|   - No actual ESG reports are available for download             |
+------------------------------------------------------------------+
  Type 'accept' to continue to the platform.
";

/// Text shown instead of downloading `report`
pub fn download_notice(report: &Report) -> String {
    format!(
        "Download {}\n\
         \n\
         Note: This is a demo platform.\n\
         No actual files will be downloaded.\n\
         \n\
         Report Details:\n\
         - Type: {}\n\
         - Size: {}\n\
         - Category: {}\n",
        report.title,
        report.kind_label(),
        report.size.as_deref().unwrap_or("unknown"),
        report.category
    )
}
