use crate::infra::Services;
use clap::Args;
use relocate::error::AppError;
use relocate::workflows::tracking::{
    ProgressDashboard, ProgressPatch, ProgressStatus, StepId, TimelineBlueprint, TimelineStats,
};

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// User id the demo checklist is created for.
    #[arg(long, default_value = "demo-user")]
    pub(crate) user: String,
    /// Number of checklist items to mark completed.
    #[arg(long, default_value_t = 2)]
    pub(crate) complete: usize,
    /// Number of leading timeline steps to mark completed.
    #[arg(long, default_value_t = 3)]
    pub(crate) timeline_steps: u32,
    /// Print every checklist item after the dashboard.
    #[arg(long)]
    pub(crate) list_items: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct TimelineReportArgs {
    /// Only show steps in this category.
    #[arg(long)]
    pub(crate) category: Option<String>,
}

pub(crate) fn run_timeline_report(args: TimelineReportArgs) -> Result<(), AppError> {
    let blueprint = TimelineBlueprint::standard();
    println!("Standard relocation timeline");

    let steps: Vec<_> = match args.category.as_deref() {
        Some(category) => blueprint.steps_for_category(category),
        None => blueprint.steps().iter().collect(),
    };
    if steps.is_empty() {
        println!("No steps match the requested category");
        return Ok(());
    }

    for step in steps {
        println!(
            "- week {:>2} | #{} {} [{}]",
            step.week, step.id, step.title, step.category
        );
        println!("    {}", step.description);
    }
    Ok(())
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        user,
        complete,
        timeline_steps,
        list_items,
    } = args;

    let services = Services::in_memory();
    let coordinator = &services.coordinator;
    let items = coordinator.seed_checklist(&user).await?;
    println!("Relocation progress demo for {user}");
    println!("Seeded {} checklist items", items.len());

    for (position, item) in items.iter().enumerate() {
        let status = if position < complete {
            ProgressStatus::Completed
        } else if position == complete {
            ProgressStatus::InProgress
        } else {
            continue;
        };
        let patch = ProgressPatch {
            status: Some(status),
            ..ProgressPatch::default()
        };
        coordinator.apply_patch(&item.id, &patch).await?;
    }
    if let Some(item) = items.get(complete) {
        if !item.subtasks.is_empty() {
            coordinator.toggle_subtask(&item.id, 0).await?;
        }
    }

    for step in 1..=timeline_steps {
        if let Err(err) = coordinator
            .update_timeline_progress(StepId(step), true, None)
            .await
        {
            println!("Skipping timeline step {step}: {err}");
        }
    }

    render_dashboard(&coordinator.progress_dashboard(&user).await?);
    render_timeline_stats(&coordinator.timeline_stats().await?);

    if list_items {
        println!("\nChecklist");
        for item in coordinator.list_items(&user, None, None).await? {
            println!(
                "- [{}] {} ({}) {}/{} sub-tasks",
                item.status.label(),
                item.title,
                item.category,
                item.completed_subtasks(),
                item.subtasks.len()
            );
        }
    }

    Ok(())
}

fn render_dashboard(dashboard: &ProgressDashboard) {
    let overview = &dashboard.overview;
    println!(
        "\nChecklist progress: {:.1}% ({} of {} completed, {} in progress, {} not started)",
        overview.completion_percentage,
        overview.completed_items,
        overview.total_items,
        overview.in_progress_items,
        overview.not_started_items
    );
    for (category, stats) in &dashboard.by_category {
        println!(
            "- {}: {}/{} ({:.1}%)",
            category, stats.completed_items, stats.total_items, stats.completion_percentage
        );
    }
}

fn render_timeline_stats(stats: &TimelineStats) {
    println!(
        "\nTimeline progress: {:.1}% ({} of {} steps)",
        stats.completion_percentage, stats.completed_steps, stats.total_steps
    );
    for (category, counts) in &stats.by_category {
        println!(
            "- {}: {}/{}",
            category, counts.completed_steps, counts.total_steps
        );
    }
}
