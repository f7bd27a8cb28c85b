use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn stockpile(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("stockpile").unwrap();
    cmd.env("STOCKPILE_HOME", home)
        .env("STOCKPILE_GLOBAL_DATA", home.join("global"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn read_records(path: &Path) -> Vec<Value> {
    let content = fs::read_to_string(path).unwrap();
    serde_json::from_str::<Vec<Value>>(&content).unwrap()
}

fn ids(records: &[Value]) -> Vec<u64> {
    records.iter().map(|r| r["id"].as_u64().unwrap()).collect()
}

#[test]
fn first_run_seeds_products_file() {
    let temp = TempDir::new().unwrap();
    let data_file = temp.path().join("products.json");

    stockpile(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Facewash"))
        .stdout(predicate::str::contains("$120.05"))
        .stdout(predicate::str::contains("Shampoo"));

    let records = read_records(&data_file);
    assert_eq!(ids(&records), vec![101, 102, 103, 104, 105, 106]);
    assert_eq!(records[1]["name"], "Toothbrush");
    assert_eq!(records[1]["price"], 10.79);
    assert_eq!(records[1]["quantity"], 20);

    // four-space indentation, stable key order
    let raw = fs::read_to_string(&data_file).unwrap();
    assert!(raw.starts_with("[\n    {\n        \"id\": 101,\n        \"name\": \"Facewash\""));
}

#[test]
fn menu_add_and_exit_persists() {
    let temp = TempDir::new().unwrap();

    stockpile(temp.path())
        .write_stdin("1\nComb\n5.89\n10\n7\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Inventory Management System"))
        .stdout(predicate::str::contains("Product added (107): Comb"))
        .stdout(predicate::str::contains(
            "Total Inventory Value in System: $2261.35",
        ));

    let records = read_records(&temp.path().join("products.json"));
    assert_eq!(records.len(), 7);
    assert_eq!(records[6]["name"], "Comb");
    assert_eq!(records[6]["price"], 5.89);
}

#[test]
fn menu_without_exit_loses_changes() {
    let temp = TempDir::new().unwrap();

    stockpile(temp.path())
        .write_stdin("3\n101\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected end of input"));

    let records = read_records(&temp.path().join("products.json"));
    assert_eq!(records.len(), 6);
    assert_eq!(records[0]["id"], 101);
}

#[test]
fn menu_retries_invalid_input() {
    let temp = TempDir::new().unwrap();

    stockpile(temp.path())
        .write_stdin("9\n6\nsoon\n0\n5\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please enter a valid choice(1-8)"))
        .stdout(predicate::str::contains("Please enter a numeric value only"))
        .stdout(predicate::str::contains("Please enter a positive value"))
        .stdout(predicate::str::contains("BodyWash"))
        .stdout(predicate::str::contains("Lotion"));
}

#[test]
fn one_shot_mutations_save() {
    let temp = TempDir::new().unwrap();
    let data_file = temp.path().join("products.json");

    stockpile(temp.path())
        .args(["update", "105", "--price", "81.33", "--quantity", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product updated (105): Lotion"));

    stockpile(temp.path())
        .args(["delete", "101"])
        .assert()
        .success();

    let records = read_records(&data_file);
    assert_eq!(ids(&records), vec![102, 103, 104, 105, 106]);
    assert_eq!(records[3]["price"], 81.33);
    assert_eq!(records[3]["quantity"], 8);
}

#[test]
fn missing_ids_fail_without_writing() {
    let temp = TempDir::new().unwrap();
    let data_file = temp.path().join("products.json");

    stockpile(temp.path()).arg("init").assert().success();
    let before = fs::read_to_string(&data_file).unwrap();

    stockpile(temp.path())
        .args(["delete", "999"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("no id 999 found"));

    stockpile(temp.path())
        .args(["update", "999", "-q", "1"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Product not found with id 999"));

    stockpile(temp.path())
        .args(["view", "999"])
        .assert()
        .failure();

    assert_eq!(fs::read_to_string(&data_file).unwrap(), before);
}

#[test]
fn low_stock_uses_configured_threshold() {
    let temp = TempDir::new().unwrap();

    stockpile(temp.path())
        .args(["low-stock"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Toner"))
        .stdout(predicate::str::contains("Toothbrush").not());

    stockpile(temp.path())
        .args(["config", "threshold", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("threshold set to 3"));

    stockpile(temp.path())
        .args(["low-stock"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lotion"))
        .stdout(predicate::str::contains("BodyWash").not());

    stockpile(temp.path())
        .args(["low-stock", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No products found below 1 units"));
}

#[test]
fn explicit_file_and_currency() {
    let temp = TempDir::new().unwrap();
    let data_file = temp.path().join("shop").join("stock.json");
    fs::create_dir_all(data_file.parent().unwrap()).unwrap();
    fs::write(
        &data_file,
        r#"[{"id": 7, "name": "Kettle", "price": "19.5", "quantity": 2}]"#,
    )
    .unwrap();

    stockpile(temp.path())
        .args(["--file", data_file.to_str().unwrap(), "config", "currency", "€"])
        .assert()
        .success();
    assert!(temp.path().join("shop").join("config.json").exists());

    stockpile(temp.path())
        .args(["--file", data_file.to_str().unwrap(), "value"])
        .assert()
        .success()
        .stdout(predicate::str::contains("€39.00"));

    stockpile(temp.path())
        .args(["--file", data_file.to_str().unwrap(), "add", "Mug", "-p", "4", "-q", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product added (8): Mug"));

    let records = read_records(&data_file);
    assert_eq!(records[0]["price"], 19.5);
    assert_eq!(records[1]["id"], 8);
    assert!(!temp.path().join("products.json").exists());
}

#[test]
fn global_scope_uses_global_dir() {
    let temp = TempDir::new().unwrap();

    stockpile(temp.path())
        .args(["-g", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("6 products"));

    assert!(temp.path().join("global").join("products.json").exists());
    assert!(!temp.path().join("products.json").exists());
}

#[test]
fn malformed_file_is_fatal() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("products.json"), "not json").unwrap();

    stockpile(temp.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Serialization error"));
}

#[test]
fn rejects_bad_flag_values() {
    let temp = TempDir::new().unwrap();

    stockpile(temp.path())
        .args(["add", "Comb", "--price", "free", "--quantity", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a numeric value only"));

    assert!(!temp.path().join("products.json").exists());
}

#[test]
fn bare_file_name_sits_next_to_config() {
    let temp = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();

    stockpile(temp.path())
        .current_dir(elsewhere.path())
        .args(["--file", "stock.json", "init"])
        .assert()
        .success();

    assert!(temp.path().join("stock.json").exists());
    assert!(!elsewhere.path().join("stock.json").exists());
}
