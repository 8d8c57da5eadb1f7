//! PagePulse CLIエントリポイント
//!
//! 5つのウィジェットをインメモリページへ配線し、ページロード相当の
//! 1回の描画（必要ならログポーリングの継続）を行って結果を出力する。

use clap::Parser;
use pagepulse::cli::Cli;
use pagepulse::fetch;
use pagepulse::logging;
use pagepulse::render::memory::PageModel;
use pagepulse::widget::{
    ContributorsFeed, GithubIndicator, LastUpdatedBadge, LogPollHandle, LogViewer,
    ServiceStatusIndicator, StarredReposFeed,
};
use pagepulse_common::config::PageConfig;
use pagepulse_common::error::{PageError, PageResult};
use tracing::info;

#[tokio::main]
async fn main() -> PageResult<()> {
    logging::init();

    let cli = Cli::parse();
    let config = cli.resolve_config();
    config.validate()?;

    let page = PageModel::new();
    let poll_handle = run_page(&page, &config, &cli.query).await;

    print!("{}", page.snapshot().render_text());

    if cli.watch {
        if let Some(handle) = &poll_handle {
            info!("Watching logs. Press Ctrl-C to stop.");
            tokio::signal::ctrl_c()
                .await
                .map_err(|e| PageError::Internal(e.to_string()))?;
            handle.stop();
            print!("{}", page.snapshot().render_text());
            return Ok(());
        }
        info!("Nothing to watch: no log requested");
    }

    if let Some(handle) = poll_handle {
        handle.stop();
    }
    Ok(())
}

/// 全ウィジェットを並行実行する（ページロード相当）
async fn run_page(page: &PageModel, config: &PageConfig, query: &str) -> Option<LogPollHandle> {
    let client = fetch::build_http_client(config.request_timeout);
    let indicator = GithubIndicator::new(page.github_ok_sink(), page.github_unavailable_sink());

    let log_viewer = LogViewer::new(
        client.clone(),
        config.log_service_url.clone(),
        page.log_sink(),
    )
    .with_poll_interval(config.poll_interval);
    let status = ServiceStatusIndicator::new(client.clone(), page.status_sink());
    let contributors =
        ContributorsFeed::new(client.clone(), page.contributors_sink(), indicator.clone());
    let starred = StarredReposFeed::new(client.clone(), page.starred_sink(), indicator)
        .with_api_base(config.github_api_url.clone());
    let last_updated = LastUpdatedBadge::new(client, page.last_updated_sink());

    let contributor_urls = config.contributor_urls();

    let (poll_handle, _, _, _, _) = tokio::join!(
        log_viewer.display_logs(query),
        status.display_status(&config.status_url),
        contributors.display_contributors(&contributor_urls),
        starred.display_starred(&config.github_user),
        last_updated.display_last_updated(&config.commits_url),
    );

    poll_handle
}
