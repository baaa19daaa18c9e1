use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use regex::Regex;
use std::fs;

mod common;
use common::{init_db_with_data, rsl, setup_test_db, temp_out};

/// Pick the id printed by `add` ("Entry #<id> recorded ...").
fn added_id(stdout: &[u8]) -> i64 {
    let text = String::from_utf8_lossy(stdout);
    let re = Regex::new(r"Entry #(\d+) recorded").unwrap();
    re.captures(&text)
        .and_then(|c| c[1].parse().ok())
        .expect("add prints the new id")
}

#[test]
fn test_list_groups_by_master() {
    let db_path = setup_test_db("cli_list_groups");
    init_db_with_data(&db_path);

    rsl()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Ivan"))
        .stdout(contains("Petr"))
        .stdout(contains("Lada Vesta, white"))
        .stdout(contains("Toyota Camry"));
}

#[test]
fn test_list_search_filters_by_car() {
    let db_path = setup_test_db("cli_list_search");
    init_db_with_data(&db_path);

    rsl()
        .args(["--db", &db_path, "list", "--search", "toyota"])
        .assert()
        .success()
        .stdout(contains("Toyota Camry"))
        .stdout(contains("Kia").not());
}

#[test]
fn test_report_custom_range() {
    let db_path = setup_test_db("cli_report_custom");
    init_db_with_data(&db_path);

    rsl()
        .args([
            "--db",
            &db_path,
            "report",
            "--from",
            "2025-01-01",
            "--to",
            "2025-01-31",
        ])
        .assert()
        .success()
        .stdout(contains("350.00"))
        .stdout(contains("175.00"))
        .stdout(contains("Petr"));
}

#[test]
fn test_report_custom_without_bounds_fails() {
    let db_path = setup_test_db("cli_report_no_bounds");
    init_db_with_data(&db_path);

    rsl()
        .args(["--db", &db_path, "report", "--period", "custom"])
        .assert()
        .failure()
        .stderr(contains("Invalid range"));
}

#[test]
fn test_report_unknown_period_shows_today_even_with_bounds() {
    let db_path = setup_test_db("cli_report_unknown_period");
    init_db_with_data(&db_path);
    let today = chrono::Local::now().date_naive();

    rsl()
        .args([
            "--db",
            &db_path,
            "report",
            "--period",
            "bogus",
            "--from",
            "2025-01-01",
            "--to",
            "2025-01-31",
        ])
        .assert()
        .success()
        .stderr(contains("Unknown period 'bogus'"))
        .stdout(contains(format!("{today} → {today}")));
}

#[test]
fn test_export_csv_custom_range() {
    let db_path = setup_test_db("cli_export_csv");
    init_db_with_data(&db_path);
    let out = temp_out("cli_export_csv", "csv");

    rsl()
        .args([
            "--db",
            &db_path,
            "export",
            "--from",
            "2025-01-01",
            "--to",
            "2025-01-31",
            "--file",
            &out,
            "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("ID,Дата,Мастер,Автомобиль,Услуги,Работа,Запчасти,Итого\r\n"));
    assert!(content.contains(",2025-01-05,Ivan,\"Lada Vesta, white\",\"Замена масла; Развал-схождение\",100,50,150.00\r\n"));
    assert!(content.contains(",2025-01-06,Petr,\"Kia \"\"Rio\"\"\",\"\",200,0,200.00\r\n"));
    assert!(!content.contains("Toyota"));
}

#[test]
fn test_export_json() {
    let db_path = setup_test_db("cli_export_json");
    init_db_with_data(&db_path);
    let out = temp_out("cli_export_json", "json");

    rsl()
        .args([
            "--db", &db_path, "export", "--format", "json", "--from", "2025-02-01", "--to",
            "2025-02-28", "--file", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let v: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(v.as_array().unwrap().len(), 1);
    assert_eq!(v[0]["car"], "Toyota Camry");
    assert_eq!(v[0]["total"], 100.0);
}

#[test]
fn test_export_empty_range_writes_nothing() {
    let db_path = setup_test_db("cli_export_empty");
    init_db_with_data(&db_path);
    let out = temp_out("cli_export_empty", "csv");

    rsl()
        .args([
            "--db", &db_path, "export", "--from", "2030-01-01", "--to", "2030-01-31", "--file",
            &out,
        ])
        .assert()
        .success()
        .stderr(contains("Nothing to export"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_add_rejects_unknown_master_when_roster_is_set() {
    let db_path = setup_test_db("cli_add_unknown_master");
    init_db_with_data(&db_path);

    rsl()
        .args(["--db", &db_path, "add", "2025-01-07", "Nobody", "VW Polo"])
        .assert()
        .failure()
        .stderr(contains("Unknown master"));
}

#[test]
fn test_add_rejects_bad_date_and_negative_cost() {
    let db_path = setup_test_db("cli_add_validation");
    init_db_with_data(&db_path);

    rsl()
        .args(["--db", &db_path, "add", "07.01.2025", "Ivan", "VW Polo"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));

    rsl()
        .args([
            "--db", &db_path, "add", "2025-01-07", "Ivan", "VW Polo", "--work=-5",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid amount"));
}

#[test]
fn test_edit_and_delete_entry() {
    let db_path = setup_test_db("cli_edit_delete");
    init_db_with_data(&db_path);

    let output = rsl()
        .args([
            "--db", &db_path, "add", "2025-01-20", "Petr", "Skoda Octavia", "--work", "40",
        ])
        .output()
        .expect("run add");
    assert!(output.status.success());
    let id = added_id(&output.stdout).to_string();

    rsl()
        .args(["--db", &db_path, "edit", &id, "--car", "Skoda Rapid", "--parts", "10"])
        .assert()
        .success()
        .stdout(contains("updated"));

    rsl()
        .args(["--db", &db_path, "list", "--search", "skoda"])
        .assert()
        .success()
        .stdout(contains("Skoda Rapid"))
        .stdout(contains("50.00"));

    rsl()
        .args(["--db", &db_path, "del", &id, "--yes"])
        .assert()
        .success()
        .stdout(contains("deleted"));

    // secondo delete: no-op
    rsl()
        .args(["--db", &db_path, "del", &id, "--yes"])
        .assert()
        .success()
        .stdout(contains("nothing to delete"));

    rsl()
        .args(["--db", &db_path, "list", "--search", "skoda"])
        .assert()
        .success()
        .stdout(contains("No entries found"));
}

#[test]
fn test_edit_unknown_id_fails() {
    let db_path = setup_test_db("cli_edit_unknown");
    init_db_with_data(&db_path);

    rsl()
        .args(["--db", &db_path, "edit", "42", "--car", "x"])
        .assert()
        .failure()
        .stderr(contains("No entry found with id 42"));
}

#[test]
fn test_clear_requires_yes() {
    let db_path = setup_test_db("cli_clear");
    init_db_with_data(&db_path);

    rsl()
        .args(["--db", &db_path, "clear"])
        .assert()
        .success();

    rsl()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Toyota Camry"));

    rsl()
        .args(["--db", &db_path, "clear", "--yes"])
        .assert()
        .success()
        .stdout(contains("3 entries erased"));

    rsl()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No entries found"));
}

#[test]
fn test_master_and_services_commands() {
    let db_path = setup_test_db("cli_master_services");
    init_db_with_data(&db_path);

    rsl()
        .args(["--db", &db_path, "master", "list"])
        .assert()
        .success()
        .stdout(contains("- Ivan"))
        .stdout(contains("- Petr"));

    rsl()
        .args(["--db", &db_path, "services", "add", "Тюнинг", "Тонировка"])
        .assert()
        .success();

    rsl()
        .args(["--db", &db_path, "services", "list"])
        .assert()
        .success()
        .stdout(contains("Тюнинг"))
        .stdout(contains("Тонировка"))
        .stdout(contains("Замена масла"));
}

#[test]
fn test_log_records_mutations() {
    let db_path = setup_test_db("cli_log");
    init_db_with_data(&db_path);

    rsl()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("Toyota Camry"));
}

#[test]
fn test_db_info() {
    let db_path = setup_test_db("cli_db_info");
    init_db_with_data(&db_path);

    rsl()
        .args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Total entries"))
        .stdout(contains("2025-01-05"))
        .stdout(contains("Integrity check passed"));
}
