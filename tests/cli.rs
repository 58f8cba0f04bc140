use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn shopbooks(data_dir: &TempDir, owner: Option<&str>) -> Command {
    let mut cmd = Command::cargo_bin("shopbooks").unwrap();
    cmd.env("SHOPBOOKS_DATA_DIR", data_dir.path());
    cmd.env_remove("SHOPBOOKS_OWNER");
    cmd.env_remove("RUST_LOG");
    if let Some(owner) = owner {
        cmd.env("SHOPBOOKS_OWNER", owner);
    }
    cmd
}

/// Run `add` and return the short ID it printed
fn add(data_dir: &TempDir, owner: &str, args: &[&str]) -> String {
    let output = shopbooks(data_dir, Some(owner)).args(args).output().unwrap();
    assert!(output.status.success(), "{:?}", output);

    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .split_whitespace()
        .nth(2)
        .unwrap()
        .trim_end_matches(':')
        .to_string()
}

fn seed_may(data_dir: &TempDir, owner: &str) -> (String, String) {
    let cost = add(
        data_dir,
        owner,
        &["cost", "add", "Flour", "-q", "1", "-p", "50000", "-d", "2025-05-01"],
    );
    let revenue = add(
        data_dir,
        owner,
        &["revenue", "add", "Cake", "-q", "1", "-p", "200000", "-d", "2025-05-02"],
    );
    (cost, revenue)
}

#[test]
fn missing_owner_is_reported() {
    let data_dir = TempDir::new().unwrap();
    shopbooks(&data_dir, None)
        .args(["cost", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No owner given"));
}

#[test]
fn monthly_summary_shows_totals() {
    let data_dir = TempDir::new().unwrap();
    seed_may(&data_dir, "alice");

    shopbooks(&data_dir, Some("alice"))
        .args(["report", "summary", "--month", "2025-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("50.000 đ"))
        .stdout(predicate::str::contains("200.000 đ"))
        .stdout(predicate::str::contains("20.000 đ"))
        .stdout(predicate::str::contains("130.000 đ"));
}

#[test]
fn export_writes_workbook() {
    let data_dir = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();
    seed_may(&data_dir, "alice");

    shopbooks(&data_dir, Some("alice"))
        .args(["report", "export", "--month", "2025-05", "--out"])
        .arg(out_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("BaoCaoDoanhThu.xlsx"));

    let bytes = std::fs::read(out_dir.path().join("BaoCaoDoanhThu.xlsx")).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn delete_needs_confirmation() {
    let data_dir = TempDir::new().unwrap();
    let (cost_id, _) = seed_may(&data_dir, "alice");

    shopbooks(&data_dir, Some("alice"))
        .args(["cost", "delete", &cost_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --yes to confirm"));

    shopbooks(&data_dir, Some("alice"))
        .args(["cost", "list"])
        .assert()
        .stdout(predicate::str::contains("Flour"));

    shopbooks(&data_dir, Some("alice"))
        .args(["cost", "delete", &cost_id, "--yes"])
        .assert()
        .success();

    shopbooks(&data_dir, Some("alice"))
        .args(["cost", "list"])
        .assert()
        .stdout(predicate::str::contains("No costs found."));
}

#[test]
fn owners_are_isolated() {
    let data_dir = TempDir::new().unwrap();
    let (cost_id, _) = seed_may(&data_dir, "alice");

    shopbooks(&data_dir, Some("bob"))
        .args(["cost", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No costs found."));

    shopbooks(&data_dir, Some("bob"))
        .args(["cost", "delete", &cost_id, "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cost not found"));
}

#[test]
fn invalid_input_is_rejected() {
    let data_dir = TempDir::new().unwrap();

    shopbooks(&data_dir, Some("alice"))
        .args(["cost", "add", "Flour", "-q", "1", "-p", "100", "-d", "01/05/2025"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));

    shopbooks(&data_dir, Some("alice"))
        .args(["revenue", "add", "Cake", "-q", "1", "-p", "0", "-d", "2025-05-02"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("greater than zero"));
}

#[test]
fn ingredient_calc_costs_a_product() {
    let data_dir = TempDir::new().unwrap();
    for (name, price) in [("Flour", "20000"), ("Sugar", "30000")] {
        shopbooks(&data_dir, Some("alice"))
            .args(["ingredient", "add", name, "-u", "kg", "-p", price])
            .assert()
            .success();
    }

    shopbooks(&data_dir, Some("alice"))
        .args(["ingredient", "calc", "flour=0.5", "sugar=0.2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product cost: 16.000 đ"));

    shopbooks(&data_dir, Some("alice"))
        .args(["ingredient", "add", "Butter", "-u", "kg", "-p", "cheap"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a number"));
}

#[test]
fn init_stores_default_owner() {
    let data_dir = TempDir::new().unwrap();
    shopbooks(&data_dir, None)
        .args(["--owner", "alice", "init"])
        .assert()
        .success();

    shopbooks(&data_dir, None)
        .args(["cost", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No costs found."));

    shopbooks(&data_dir, None)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Default owner:   alice"));
}
