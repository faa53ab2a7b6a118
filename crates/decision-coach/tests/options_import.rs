use chrono::NaiveDate;
use decision_coach::workflows::decision::{DecisionCoach, DecisionRequest};
use decision_coach::workflows::options_csv::{OptionImportError, OptionSheetImporter};
use std::io::Write;

const SHEET: &str = "Name,Cost,ValueScore,Joy,Category\n\
Suit Supply Suit,800,9,9,Fashion\n\
Suit Supply Jeans,250,8,8,Fashion\n\
Uniqlo Wardrobe Refresh,250,7,7,Fashion\n\
Socks,twelve,5,5,Fashion\n\
,,,,\n";

#[test]
fn imported_sheet_feeds_the_coach() {
    let options = OptionSheetImporter::from_reader(SHEET.as_bytes()).expect("import succeeds");
    assert_eq!(options.len(), 5);

    let request = DecisionRequest {
        decision_name: "Birthday gift".to_string(),
        available_amount: 250.0,
        giving_pct: 10.0,
        saving_pct: 10.0,
        review_on: None,
        options,
        heart_check: None,
    };
    let today = NaiveDate::from_ymd_opt(2025, 3, 1).expect("valid date");
    let report = DecisionCoach::default()
        .evaluate(request, today)
        .expect("evaluation succeeds");

    assert_eq!(report.scored_options.len(), 4);
    assert!(report.allocation.fund_now.is_empty());
    assert_eq!(report.allocation.skipped.len(), 1);
    assert_eq!(report.allocation.skipped[0].option.name, "Socks");
}

#[test]
fn imports_from_a_file_path() {
    let path = std::env::temp_dir().join(format!(
        "decision-coach-options-{}.csv",
        std::process::id()
    ));
    let mut file = std::fs::File::create(&path).expect("create temp sheet");
    file.write_all(SHEET.as_bytes()).expect("write sheet");
    drop(file);

    let options = OptionSheetImporter::from_path(&path).expect("import succeeds");
    std::fs::remove_file(&path).ok();

    assert_eq!(options[1].name, "Suit Supply Jeans");
}

#[test]
fn missing_file_is_an_io_error() {
    let result = OptionSheetImporter::from_path("/definitely/not/here/options.csv");
    assert!(matches!(result, Err(OptionImportError::Io(_))));
}
