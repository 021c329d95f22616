//! Explicit table definitions.
//!
//! Each table is spelled out as data (column name, storage type, nullability,
//! foreign-key target) instead of being inferred from struct attributes. The
//! definition renders its own `CREATE TABLE` statement and is checked against
//! the SeaORM entity in tests.

use clap::ValueEnum;
use sea_orm::sea_query::{
    Alias, ColumnDef, Expr, ForeignKey as ForeignKeyBuilder, Table, TableCreateStatement,
};
use sea_orm::DbBackend;
use serde::Serialize;

/// Database flavour to render DDL for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SchemaBackend {
    Postgres,
    Mysql,
    Sqlite,
}

impl From<SchemaBackend> for DbBackend {
    fn from(backend: SchemaBackend) -> Self {
        match backend {
            SchemaBackend::Postgres => DbBackend::Postgres,
            SchemaBackend::Mysql => DbBackend::MySql,
            SchemaBackend::Sqlite => DbBackend::Sqlite,
        }
    }
}

/// Column storage types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageType {
    Uuid,
    Text,
    BigInt,
    TimestampTz,
}

/// Value the database fills in when an insert omits the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnDefault {
    RandomUuid,
}

impl ColumnDefault {
    /// SQL default expression, if the backend has one.
    ///
    /// SQLite has no UUID generator, so ids must come from the writer there.
    pub fn expression(&self, backend: SchemaBackend) -> Option<&'static str> {
        match (self, backend) {
            (ColumnDefault::RandomUuid, SchemaBackend::Postgres) => Some("gen_random_uuid()"),
            (ColumnDefault::RandomUuid, SchemaBackend::Mysql) => Some("(UUID_TO_BIN(UUID()))"),
            (ColumnDefault::RandomUuid, SchemaBackend::Sqlite) => None,
        }
    }
}

/// Foreign-key target of a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForeignKey {
    pub table: &'static str,
    pub column: &'static str,
}

/// A child table whose column points back at this table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackReference {
    pub table: &'static str,
    pub column: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSchema {
    pub name: &'static str,
    pub storage: StorageType,
    pub nullable: bool,
    pub primary_key: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<ColumnDefault>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreign_key: Option<ForeignKey>,
}

impl ColumnSchema {
    fn required(name: &'static str, storage: StorageType) -> Self {
        Self {
            name,
            storage,
            nullable: false,
            primary_key: false,
            default: None,
            foreign_key: None,
        }
    }

    fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    fn default_to(mut self, default: ColumnDefault) -> Self {
        self.default = Some(default);
        self
    }

    fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    fn references(mut self, table: &'static str, column: &'static str) -> Self {
        self.foreign_key = Some(ForeignKey { table, column });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSchema {
    pub name: &'static str,
    pub columns: Vec<ColumnSchema>,
    pub back_references: Vec<BackReference>,
}

impl TableSchema {
    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&ColumnSchema> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Build the `CREATE TABLE IF NOT EXISTS` statement, foreign keys included.
    pub fn create_table_statement(&self, backend: SchemaBackend) -> TableCreateStatement {
        let mut table = Table::create();
        table.table(Alias::new(self.name)).if_not_exists();

        for column in &self.columns {
            let mut def = ColumnDef::new(Alias::new(column.name));
            match column.storage {
                StorageType::Uuid => def.uuid(),
                StorageType::Text => def.text(),
                StorageType::BigInt => def.big_integer(),
                StorageType::TimestampTz => def.timestamp_with_time_zone(),
            };
            if column.nullable {
                def.null();
            } else {
                def.not_null();
            }
            if column.primary_key {
                def.primary_key();
            }
            if let Some(expr) = column.default.and_then(|d| d.expression(backend)) {
                def.default(Expr::cust(expr));
            }
            table.col(&mut def);

            if let Some(fk) = &column.foreign_key {
                table.foreign_key(
                    ForeignKeyBuilder::create()
                        .name(format!("fk_{}_{}", self.name, column.name))
                        .from(Alias::new(self.name), Alias::new(column.name))
                        .to(Alias::new(fk.table), Alias::new(fk.column)),
                );
            }
        }

        table.to_owned()
    }

    /// Render the create statement as SQL for the given backend.
    pub fn to_sql(&self, backend: SchemaBackend) -> String {
        DbBackend::from(backend)
            .build(&self.create_table_statement(backend))
            .sql
    }
}

/// The `interview_sessions` table.
pub fn interview_sessions() -> TableSchema {
    TableSchema {
        name: "interview_sessions",
        columns: vec![
            ColumnSchema::required("id", StorageType::Uuid)
                .primary_key()
                .default_to(ColumnDefault::RandomUuid),
            ColumnSchema::required("user_id", StorageType::Uuid).references("users", "id"),
            ColumnSchema::required("description", StorageType::Text),
            ColumnSchema::required("domain_id", StorageType::BigInt).references("domains", "id"),
            ColumnSchema::required("started_at", StorageType::TimestampTz),
            ColumnSchema::required("completed_at", StorageType::TimestampTz).nullable(),
        ],
        back_references: vec![
            BackReference {
                table: "user_questions",
                column: "session_id",
            },
            BackReference {
                table: "responses",
                column: "session_id",
            },
        ],
    }
}
