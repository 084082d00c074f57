pub mod upgrade_report_logger;
