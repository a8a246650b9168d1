//! Closed enumeration of view kinds.
//!
//! The original dashboard dispatched its display logic on raw endpoint
//! strings. Here every kind is a variant, scoped by backend family so
//! `summary` under `/api/mongodb` and `summary` under `/api/mysql` stay
//! distinct, and the renderer can match exhaustively. A kind string that
//! fails to parse routes to the renderer's raw-dump fallback instead.

use std::fmt;

/// Backend family an endpoint (and its views) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Mongo,
    Mysql,
    Reports,
}

impl Family {
    /// Display label used in headings and connection-failure messages.
    pub fn label(&self) -> &'static str {
        match self {
            Family::Mongo => "MongoDB",
            Family::Mysql => "MySQL",
            Family::Reports => "Reports",
        }
    }

    /// URL prefix for the family's endpoints. Reports are fabricated
    /// client-side and never hit the network.
    pub fn base_path(&self) -> &'static str {
        match self {
            Family::Mongo => "/api/mongodb",
            Family::Mysql => "/api/mysql",
            Family::Reports => "",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    // family A: /api/mongodb
    MongoSummary,
    SalesReport,
    TopProducts,
    CustomerSummary,
    LowStock,
    // family B: /api/mysql
    MysqlSummary,
    Joins,
    Triggers,
    StoredProcedures,
    UserManagement,
    // family C: synthetic reports, no endpoint
    SalesAnalytics,
    Segmentation,
    Association,
}

impl ViewKind {
    /// Resolves a kind tag within its family. `None` means the tag is
    /// outside the known set and the caller should fall back to a raw
    /// dump of the payload.
    pub fn parse(family: Family, name: &str) -> Option<Self> {
        match (family, name) {
            (Family::Mongo, "summary") => Some(ViewKind::MongoSummary),
            (Family::Mongo, "sales-report") => Some(ViewKind::SalesReport),
            (Family::Mongo, "top-products") => Some(ViewKind::TopProducts),
            (Family::Mongo, "customer-summary") => Some(ViewKind::CustomerSummary),
            (Family::Mongo, "low-stock") => Some(ViewKind::LowStock),
            (Family::Mysql, "summary") => Some(ViewKind::MysqlSummary),
            (Family::Mysql, "joins") => Some(ViewKind::Joins),
            (Family::Mysql, "triggers") => Some(ViewKind::Triggers),
            (Family::Mysql, "stored-procedures") => Some(ViewKind::StoredProcedures),
            (Family::Mysql, "user-management") => Some(ViewKind::UserManagement),
            (Family::Reports, "sales") => Some(ViewKind::SalesAnalytics),
            (Family::Reports, "segmentation") => Some(ViewKind::Segmentation),
            (Family::Reports, "association") => Some(ViewKind::Association),
            _ => None,
        }
    }

    pub fn family(&self) -> Family {
        match self {
            ViewKind::MongoSummary
            | ViewKind::SalesReport
            | ViewKind::TopProducts
            | ViewKind::CustomerSummary
            | ViewKind::LowStock => Family::Mongo,
            ViewKind::MysqlSummary
            | ViewKind::Joins
            | ViewKind::Triggers
            | ViewKind::StoredProcedures
            | ViewKind::UserManagement => Family::Mysql,
            ViewKind::SalesAnalytics | ViewKind::Segmentation | ViewKind::Association => {
                Family::Reports
            }
        }
    }

    /// The wire tag, which is also the endpoint path segment for the two
    /// server-backed families.
    pub fn name(&self) -> &'static str {
        match self {
            ViewKind::MongoSummary | ViewKind::MysqlSummary => "summary",
            ViewKind::SalesReport => "sales-report",
            ViewKind::TopProducts => "top-products",
            ViewKind::CustomerSummary => "customer-summary",
            ViewKind::LowStock => "low-stock",
            ViewKind::Joins => "joins",
            ViewKind::Triggers => "triggers",
            ViewKind::StoredProcedures => "stored-procedures",
            ViewKind::UserManagement => "user-management",
            ViewKind::SalesAnalytics => "sales",
            ViewKind::Segmentation => "segmentation",
            ViewKind::Association => "association",
        }
    }

    /// All kinds of the two server-backed families, in display order.
    pub fn server_backed() -> impl Iterator<Item = ViewKind> {
        [
            ViewKind::MongoSummary,
            ViewKind::SalesReport,
            ViewKind::TopProducts,
            ViewKind::CustomerSummary,
            ViewKind::LowStock,
            ViewKind::MysqlSummary,
            ViewKind::Joins,
            ViewKind::Triggers,
            ViewKind::StoredProcedures,
            ViewKind::UserManagement,
        ]
        .into_iter()
    }
}
