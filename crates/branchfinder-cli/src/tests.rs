use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["branchfinder"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
    assert_eq!(cli.format, OutputFormat::Text);
}

#[test]
fn parses_list_with_all_filters() {
    let cli = Cli::try_parse_from([
        "branchfinder",
        "list",
        "--search",
        "makati",
        "--location",
        "NCR",
        "--type",
        "ATM",
    ])
    .expect("expected valid cli args");

    let Some(Commands::List { filters }) = cli.command else {
        panic!("expected list command");
    };
    assert_eq!(
        filters.into_commands(),
        vec![
            Command::Search("makati".to_string()),
            Command::SetLocation("NCR".to_string()),
            Command::SetCategory("ATM".to_string()),
        ]
    );
}

#[test]
fn parses_map_with_short_flags() {
    let cli = Cli::try_parse_from(["branchfinder", "map", "-l", "VIS", "-t", "Branch"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Map {
            filters: FilterArgs {
                search: None,
                location: Some(ref l),
                category: Some(ref c),
            }
        }) if l == "VIS" && c == "Branch"
    ));
}

#[test]
fn no_filters_produce_no_commands() {
    assert!(FilterArgs::default().into_commands().is_empty());
}

#[test]
fn parses_detail_index() {
    let cli = Cli::try_parse_from(["branchfinder", "detail", "12"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Detail { index: 12 })));
}

#[test]
fn detail_rejects_non_numeric_index() {
    assert!(Cli::try_parse_from(["branchfinder", "detail", "first"]).is_err());
}

#[test]
fn file_and_url_conflict() {
    let result = Cli::try_parse_from([
        "branchfinder",
        "--file",
        "branches.json",
        "--url",
        "http://localhost:3000/branchLocator.json",
        "list",
    ]);
    assert!(result.is_err());
}

#[test]
fn global_flags_accepted_after_subcommand() {
    let cli = Cli::try_parse_from(["branchfinder", "locations", "--format", "json"])
        .expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Locations)));
    assert_eq!(cli.format, OutputFormat::Json);
}

fn test_config() -> AppConfig {
    AppConfig {
        env: branchfinder_core::Environment::Test,
        log_level: "info".to_string(),
        bind_addr: "127.0.0.1:3000".parse().expect("addr"),
        data_url: "http://localhost:3000/branchLocator.json".to_string(),
        data_path: None,
        static_dir: PathBuf::from("./public"),
        request_timeout_secs: 30,
        user_agent: "branchfinder-test".to_string(),
        default_center_lat: 13.0,
        default_center_lng: 122.0,
        default_zoom: 6,
        detail_zoom: 15,
        marker_limit: 100,
        bounds_padding: 0.1,
    }
}

#[test]
fn source_prefers_cli_file_then_url_then_config() {
    let config = test_config();

    let cli = Cli::try_parse_from(["branchfinder", "--file", "local.json"]).expect("args");
    assert_eq!(
        resolve_source(&cli, &config),
        DataSource::File(PathBuf::from("local.json"))
    );

    let cli = Cli::try_parse_from(["branchfinder", "--url", "http://example.test/b.json"])
        .expect("args");
    assert_eq!(
        resolve_source(&cli, &config),
        DataSource::Url("http://example.test/b.json".to_string())
    );

    let cli = Cli::try_parse_from(["branchfinder"]).expect("args");
    assert_eq!(
        resolve_source(&cli, &config),
        DataSource::Url(config.data_url.clone())
    );

    let with_path = AppConfig {
        data_path: Some(PathBuf::from("/srv/branches.json")),
        ..test_config()
    };
    assert_eq!(
        resolve_source(&cli, &with_path),
        DataSource::File(PathBuf::from("/srv/branches.json"))
    );
}
