use mestri::{Config, Reply, Shell};

fn run(shell: &mut Shell, lines: &[&str]) -> Vec<String> {
    lines
        .iter()
        .map(|line| match shell.execute(line) {
            Ok(Reply::Output(text)) => text,
            Ok(Reply::Quit) => "<quit>".to_string(),
            Err(e) => format!("error: {}", e),
        })
        .collect()
}

#[test]
fn test_design_then_plan() {
    let mut shell = Shell::new(&Config::default());
    let out = run(
        &mut shell,
        &[
            "open",
            "add bedroom",
            "set 1 length 15",
            "add kitchen",
            "stats",
            "save",
            "form complexity high",
            "form facing east",
            "form floors 2",
            "plan",
        ],
    );

    assert_eq!(out[1], "Added bedroom 1");
    assert_eq!(out[4], "Total area: 270 sqft (30 sq yards)");
    assert_eq!(out[5], "Applied 2 rooms, 270 sqft to the project form");
    assert!(!shell.designer().is_open());
    assert_eq!(shell.form().area, "270");

    let json: serde_json::Value = serde_json::from_str(&out[9]).unwrap();
    assert_eq!(json["area"], 270.0);
    assert_eq!(json["floors"], 2);
    assert_eq!(json["complexity"], "high");
    assert_eq!(json["facing"], "east");
    assert_eq!(json["custom_layout"][0]["length"], 15.0);
    assert_eq!(json["custom_layout"][1]["name"], "kitchen");
}

#[test]
fn test_errors_do_not_end_session() {
    let mut shell = Shell::new(&Config::default());
    let out = run(
        &mut shell,
        &["frobnicate", "form area 10", "plan", "add study", "quit"],
    );

    assert!(out[0].starts_with("error:"));
    assert!(out[2].starts_with("error:"));
    assert_eq!(out[3], "Added study 1");
    assert_eq!(out[4], "<quit>");
}

#[test]
fn test_pointer_commands() {
    let mut shell = Shell::new(&Config::default());
    let out = run(
        &mut shell,
        &["add bedroom", "down 30 30", "move 40 35", "up", "move 90 90"],
    );

    assert_eq!(out[1], "Grabbed room 1");
    assert_eq!(out[2], "Room 1 at (30, 25)");
    assert_eq!(out[4], "Not dragging");
}
