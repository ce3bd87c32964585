// SPDX-License-Identifier: EUPL-1.2
// Copyright (c) 2026 Benjamin Küttner <benjamin.kuettner@icloud.com>
// Patent Pending — DE Gebrauchsmuster, filed 2026-02-23

use anyhow::Result;
use clap::{Parser, Subcommand};
use netvision_core::config::Config;
use netvision_core::{
    gateway, observability, AccessMatrix, NavigationProjector, PermissionResolver, RoleCatalog,
    RoleId,
};
use std::path::PathBuf;

/// NetVision — role-aware network operations dashboard.
#[derive(Parser, Debug)]
#[command(name = "netvision", version, about)]
struct Cli {
    /// Path to config.toml (defaults to the platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP gateway
    Serve {
        /// Listen host (overrides config)
        #[arg(long)]
        host: Option<String>,
        /// Listen port (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// List the role catalog
    Roles,
    /// Print the feature-by-role access matrix
    Matrix,
    /// Show the navigation menu of a role
    Nav {
        /// Role id (Admin, SRE, CIO, Security)
        role: String,
    },
    /// Resolve one (feature, role) pair
    Resolve {
        /// Feature name or key, e.g. "Query Engine" or query_engine
        feature: String,
        /// Role id
        role: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    observability::init(&config.observability);

    match cli.command {
        Commands::Serve { host, port } => {
            let host = host.unwrap_or_else(|| config.gateway.host.clone());
            let port = port.unwrap_or(config.gateway.port);
            gateway::run_gateway(&host, port, config).await
        }
        Commands::Roles => {
            for role in RoleCatalog::all() {
                println!(
                    "{} {:<9} {:<18} {}",
                    role.icon,
                    role.id.as_str(),
                    role.label,
                    role.description
                );
            }
            Ok(())
        }
        Commands::Matrix => {
            print!("{:<20}", "Feature");
            for role in RoleId::ALL {
                print!("{:<12}", role.as_str());
            }
            println!();
            for row in AccessMatrix::rows() {
                print!("{:<20}", row.feature.name());
                for (_, level) in row.grants {
                    print!("{:<12}", level.as_str());
                }
                println!();
            }
            Ok(())
        }
        Commands::Nav { role } => {
            let role: RoleId = role.parse()?;
            for item in NavigationProjector::visible(role) {
                println!("  {} {}", item.icon, item.label);
            }
            for item in NavigationProjector::hidden(role) {
                println!("  🔒 {} (locked)", item.label);
            }
            Ok(())
        }
        Commands::Resolve { feature, role } => {
            let level = PermissionResolver::resolve_named(&feature, &role)?;
            println!("{level}");
            Ok(())
        }
    }
}
