#[cfg(test)]
mod haproxy_tests {
    use crate::config::structs::configuration::Configuration;
    use crate::config::structs::route_config::RouteConfig;
    use crate::haproxy::haproxy::{generate_haproxy_config, write_haproxy_config};

    fn config() -> Configuration {
        let mut config = Configuration::init();
        config.vwr.routes.insert(String::from("shop"), RouteConfig {
            active_users: 5,
            path: String::from("/shop"),
            host: String::from("10.0.0.2:80"),
        });
        config
    }

    #[test]
    fn test_peers_section_points_at_this_node() {
        let rendered = generate_haproxy_config(&config());
        assert!(rendered.contains("peers lineq\n"));
        assert!(rendered.contains("\tserver haproxy1\n"));
        assert!(rendered.contains("\tserver lineq 127.0.0.1:11111\n"));
    }

    #[test]
    fn test_stick_tables() {
        let rendered = generate_haproxy_config(&config());
        assert!(rendered.contains("backend room\n\tstick-table type string len 32 size 2 expire 1d store gpc0 peers lineq\n"));
        assert!(rendered.contains("backend users\n\tstick-table type string len 72 size 100k expire 5m store gpc1 peers lineq\n"));
    }

    #[test]
    fn test_one_backend_per_route() {
        let rendered = generate_haproxy_config(&config());
        assert!(rendered.contains("\tacl route_shop path_beg /shop\n"));
        assert!(rendered.contains("\tuse_backend bk_yes_site if has_slot route_site\n"));
        assert!(rendered.contains("backend bk_yes_shop\n\tmode http\n\tserver shop 10.0.0.2:80\n"));
        assert!(rendered.ends_with("backend bk_no\n\tmode http\n\tserver lineq 127.0.0.1:8060\n"));
    }

    #[test]
    fn test_write_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("haproxy.cfg");
        let path = path.to_str().unwrap();
        write_haproxy_config(&config(), path).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), generate_haproxy_config(&config()));
    }
}
