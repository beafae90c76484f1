use std::fmt::Write as _;
use std::fs::File;
use std::io::Write;
use log::info;
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::configuration::Configuration;
use crate::store::impls::registry_rooms::ROOM_TABLE_KEY_LEN;

pub const HAPROXY_CONFIG_FILE: &str = "haproxy.cfg";
pub const PEERS_SECTION: &str = "lineq";
pub const HAPROXY_PEER_NAME: &str = "haproxy1";

/// Session id, `@` and route name.
pub const USER_TABLE_KEY_LEN: u64 = 72;

/// Renders `haproxy.cfg` for the configured routes.
pub fn generate_haproxy_config(config: &Configuration) -> String {
    let vwr = &config.vwr;
    let mut out = String::new();
    let no_cookie = "!{ var(txn.has_cookie) -m int gt 0 }";
    let has_cookie = "{ var(txn.has_cookie) -m int gt 0 }";

    let _ = writeln!(out, "#### lineq HAProxy configuration ####");
    let _ = writeln!(out, "#### adjust addresses and sizes to your deployment ####");
    let _ = writeln!(out, "peers {PEERS_SECTION}");
    let _ = writeln!(out, "\tbind 0.0.0.0:55555");
    let _ = writeln!(out, "\tserver {HAPROXY_PEER_NAME}");
    let _ = writeln!(out, "\tserver {} {}", config.peer.name, config.peer.bind_address);
    let _ = writeln!(out);

    let _ = writeln!(out, "backend {}", vwr.room_table);
    let _ = writeln!(
        out,
        "\tstick-table type string len {} size {} expire 1d store gpc0 peers {PEERS_SECTION}",
        ROOM_TABLE_KEY_LEN,
        vwr.routes.len().max(1)
    );
    let _ = writeln!(out, "backend {}", vwr.user_table);
    let _ = writeln!(
        out,
        "\tstick-table type string len {} size 100k expire {}m store gpc1 peers {PEERS_SECTION}",
        USER_TABLE_KEY_LEN,
        vwr.inactivity_duration
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "frontend fe_main");
    let _ = writeln!(out, "\tmode http");
    let _ = writeln!(out, "\tbind *:{}", vwr.target_port);
    let _ = writeln!(out, "\thttp-request set-var(txn.has_cookie) req.cook_cnt(sessionid)");
    let _ = writeln!(out, "\thttp-request set-var(txn.t2) uuid() if {no_cookie}");
    let _ = writeln!(out, "\thttp-response add-header Set-Cookie \"sessionid=%[var(txn.t2)]; path=/\" if {no_cookie}");
    let _ = writeln!(out, "\thttp-request set-var(txn.sessionid) req.cook(sessionid) if {has_cookie}");
    let _ = writeln!(out, "\thttp-request set-var(txn.sessionid) var(txn.t2) if {no_cookie}");
    for (name, route) in &vwr.routes {
        let _ = writeln!(out, "\tacl route_{name} path_beg {}", route.path);
        let _ = writeln!(out, "\thttp-request set-var(txn.route) str({name}) if route_{name}");
        let _ = writeln!(out, "\thttp-request track-sc0 str({name}) table {} if route_{name}", vwr.room_table);
    }
    let _ = writeln!(out, "\thttp-request set-var(txn.session_key) var(txn.sessionid),concat(@,txn.route,)");
    let _ = writeln!(out, "\thttp-request track-sc1 var(txn.session_key) table {}", vwr.user_table);
    let _ = writeln!(out, "\tacl has_slot sc_get_gpc1(1) eq 1");
    let _ = writeln!(out, "\tacl free_slot sc_get_gpc0(0) gt 0");
    let _ = writeln!(out, "\thttp-request sc-inc-gpc1(1) if free_slot !has_slot");
    for name in vwr.routes.keys() {
        let _ = writeln!(out, "\tuse_backend bk_yes_{name} if has_slot route_{name}");
    }
    let _ = writeln!(out, "\tdefault_backend bk_no");

    for (name, route) in &vwr.routes {
        let _ = writeln!(out);
        let _ = writeln!(out, "backend bk_yes_{name}");
        let _ = writeln!(out, "\tmode http");
        let _ = writeln!(out, "\tserver {name} {}", route.host);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "backend bk_no");
    let _ = writeln!(out, "\tmode http");
    let _ = writeln!(out, "\tserver {} {}", config.peer.name, config.web.bind_address);
    out
}

pub fn write_haproxy_config(config: &Configuration, path: &str) -> Result<(), CustomError> {
    let rendered = generate_haproxy_config(config);
    let mut file = File::create(path).map_err(|error| CustomError::new(&format!("could not create {path}: {error}")))?;
    file.write_all(rendered.as_bytes()).map_err(|error| CustomError::new(&format!("could not write {path}: {error}")))?;
    info!("[BOOT] HAProxy configuration written to {path}");
    Ok(())
}
