//! Tables, views and view-definition commands

use anyhow::{Context, Result};
use molo_db::{catalog_for, ViewCatalog};

use crate::cli::{GlobalArgs, ViewDefinitionArgs};
use crate::context::RuntimeContext;

fn catalog(ctx: &RuntimeContext) -> Result<Box<dyn ViewCatalog>> {
    let env = ctx.environment()?;
    Ok(catalog_for(env.database.adapter))
}

/// List base tables
pub async fn tables(global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::load(global)?;
    let catalog = catalog(&ctx)?;
    let (_, db) = ctx.connect()?;

    let names = catalog
        .base_tables(db.as_ref())
        .await
        .context("Failed to list tables")?;
    for name in names {
        println!("{}", name);
    }
    Ok(())
}

/// List views
pub async fn views(global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::load(global)?;
    let catalog = catalog(&ctx)?;
    if !catalog.supports_views() {
        anyhow::bail!("The {} adapter does not support views", catalog.adapter());
    }
    let (_, db) = ctx.connect()?;

    let names = catalog
        .views(db.as_ref())
        .await
        .context("Failed to list views")?;
    for name in names {
        println!("{}", name);
    }
    Ok(())
}

/// Print the select statement behind a view
pub async fn view_definition(args: &ViewDefinitionArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::load(global)?;
    let catalog = catalog(&ctx)?;
    let (_, db) = ctx.connect()?;

    let sql = catalog.view_select_statement(db.as_ref(), &args.view).await?;
    println!("{}", sql);
    Ok(())
}
