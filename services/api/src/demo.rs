use crate::infra::{default_buckets, default_wardrobe_options, parse_answer, parse_bucket};
use crate::verses::VerseCycle;
use chrono::{Local, NaiveDate};
use clap::Args;
use decision_coach::config::AppConfig;
use decision_coach::error::AppError;
use decision_coach::workflows::decision::{
    AllocatedOption, Answer, Bucket, BucketPlan, BucketPlanRequest, DecisionCoach,
    DecisionReport, DecisionRequest, HeartCheckAnswers, HeartCheckEngine,
};
use decision_coach::workflows::options_csv::OptionSheetImporter;
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// What decision you are working through
    #[arg(long, default_value = "Birthday gift: wardrobe upgrade")]
    pub(crate) name: String,
    /// Total amount available for this decision
    #[arg(long, default_value_t = 250.0)]
    pub(crate) amount: f64,
    /// Share reserved for giving, 0-100
    #[arg(long, default_value_t = 10.0)]
    pub(crate) giving_pct: f64,
    /// Share reserved for saving or investing, 0-100
    #[arg(long, default_value_t = 10.0)]
    pub(crate) saving_pct: f64,
    /// CSV with Name, Cost, ValueScore, Joy, Category columns (defaults to a sample wardrobe)
    #[arg(long)]
    pub(crate) options_csv: Option<PathBuf>,
    /// Did God author or affirm this desire? (Yes/Unsure/No)
    #[arg(long, value_parser = parse_answer)]
    pub(crate) god_authored: Option<Answer>,
    /// Do you genuinely want this?
    #[arg(long, value_parser = parse_answer)]
    pub(crate) want: Option<Answer>,
    /// Is this good for future generations?
    #[arg(long, value_parser = parse_answer)]
    pub(crate) future_good: Option<Answer>,
    /// Do the numbers make sense?
    #[arg(long, value_parser = parse_answer)]
    pub(crate) financial_sense: Option<Answer>,
    /// Date to re-check the decision (YYYY-MM-DD); defaults to a week out
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) review_on: Option<NaiveDate>,
    /// Override the evaluation date (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the full report as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

impl EvaluateArgs {
    /// Heart check answers, if any prompt was answered. Unanswered prompts count as Unsure.
    pub(crate) fn heart_check(&self) -> Option<HeartCheckAnswers> {
        let answered = [
            self.god_authored,
            self.want,
            self.future_good,
            self.financial_sense,
        ];
        if answered.iter().all(Option::is_none) {
            return None;
        }

        Some(HeartCheckAnswers {
            god_authored: self.god_authored.unwrap_or(Answer::Unsure),
            want: self.want.unwrap_or(Answer::Unsure),
            future_good: self.future_good.unwrap_or(Answer::Unsure),
            financial_sense: self.financial_sense.unwrap_or(Answer::Unsure),
        })
    }
}

#[derive(Args, Debug)]
pub(crate) struct BucketsArgs {
    /// Amount to spread across the buckets
    #[arg(long)]
    pub(crate) amount: f64,
    /// Bucket as LABEL=PERCENT; repeat for each bucket (defaults to Giving/Saving/Wants)
    #[arg(long = "bucket", value_parser = parse_bucket)]
    pub(crate) buckets: Vec<Bucket>,
    /// Print the plan as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct VerseArgs {
    /// Which verse to show; wraps around the list
    #[arg(long, default_value_t = 0)]
    pub(crate) index: usize,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the evaluation date (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

fn load_coach() -> Result<DecisionCoach, AppError> {
    let config = AppConfig::load()?;
    Ok(DecisionCoach::from_config(&config.coach))
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let coach = load_coach()?;
    let heart_check = args.heart_check();
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    let options = match &args.options_csv {
        Some(path) => OptionSheetImporter::from_path(path)?,
        None => default_wardrobe_options(),
    };

    let request = DecisionRequest {
        decision_name: args.name,
        available_amount: args.amount,
        giving_pct: args.giving_pct,
        saving_pct: args.saving_pct,
        review_on: args.review_on,
        options,
        heart_check,
    };
    let report = coach.evaluate(request, today)?;

    if args.json {
        println!("{}", to_pretty_json(&report));
    } else {
        print!("{}", render_decision_report(&report));
        if let Some(answers) = &heart_check {
            print!(
                "{}",
                render_heart_check_breakdown(coach.heart_check_engine(), answers)
            );
        }
    }

    Ok(())
}

pub(crate) fn run_buckets(args: BucketsArgs) -> Result<(), AppError> {
    let coach = load_coach()?;
    let buckets = if args.buckets.is_empty() {
        default_buckets()
    } else {
        args.buckets
    };

    let plan = coach.plan_buckets(&BucketPlanRequest {
        amount: args.amount,
        buckets,
    })?;

    if args.json {
        println!("{}", to_pretty_json(&plan));
    } else {
        print!("{}", render_bucket_plan(&plan));
    }

    Ok(())
}

pub(crate) fn run_verse(args: VerseArgs) -> Result<(), AppError> {
    print!("{}", render_verse(VerseCycle::at(args.index)));
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let coach = load_coach()?;
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    println!("Kingdom decision coach demo\n");
    print!("{}", render_verse(VerseCycle::default()));

    let answers = HeartCheckAnswers {
        god_authored: Answer::Yes,
        want: Answer::Yes,
        future_good: Answer::Yes,
        financial_sense: Answer::Unsure,
    };
    let request = DecisionRequest {
        decision_name: "Birthday gift: wardrobe upgrade".to_string(),
        available_amount: 250.0,
        giving_pct: 10.0,
        saving_pct: 10.0,
        review_on: None,
        options: default_wardrobe_options(),
        heart_check: Some(answers),
    };
    let report = coach.evaluate(request, today)?;
    println!();
    print!("{}", render_decision_report(&report));
    print!(
        "{}",
        render_heart_check_breakdown(coach.heart_check_engine(), &answers)
    );

    let plan = coach.plan_buckets(&BucketPlanRequest {
        amount: 250.0,
        buckets: default_buckets(),
    })?;
    println!();
    print!("{}", render_bucket_plan(&plan));

    Ok(())
}

fn to_pretty_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|err| format!("{{\"error\": \"failed to serialize output: {err}\"}}"))
}

pub(crate) fn render_decision_report(report: &DecisionReport) -> String {
    let mut out = String::new();
    let split = &report.split;
    let allocation = &report.allocation;

    if !report.decision_name.is_empty() {
        let _ = writeln!(out, "Decision: {}", report.decision_name);
    }
    let _ = writeln!(out, "Evaluated {}", report.evaluated_on);

    let _ = writeln!(out, "\nHigh-level allocation");
    let _ = writeln!(out, "- Total available: {}", format_currency(split.total, 2));
    let _ = writeln!(
        out,
        "- Reserved for giving: {}",
        format_currency(split.giving_amount, 2)
    );
    let _ = writeln!(
        out,
        "- Reserved for saving/investing: {}",
        format_currency(split.saving_amount, 2)
    );
    let _ = writeln!(
        out,
        "- Budget for wants: {}",
        format_currency(split.wants_budget, 2)
    );

    let _ = writeln!(out, "\nOptions with value/joy scores");
    for option in &report.scored_options {
        let _ = writeln!(
            out,
            "- {} | cost {} | value {} | joy {} | score {:.4}{}",
            option.name,
            format_currency(option.cost, 2),
            option.value_score,
            option.joy,
            option.score,
            category_suffix(&option.category)
        );
    }

    if allocation.fund_now.is_empty() {
        let _ = writeln!(
            out,
            "\nRecommended to do now: nothing clearly fits right now"
        );
    } else {
        let _ = writeln!(
            out,
            "\nRecommended to do now ({} of {} wants budget)",
            format_currency(allocation.spent, 2),
            format_currency(allocation.wants_budget, 2)
        );
        for row in &allocation.fund_now {
            let _ = writeln!(out, "{}", render_allocated(row));
        }
    }

    let backlog = allocation.backlog();
    if backlog.is_empty() {
        let _ = writeln!(out, "\nBacklog: none");
    } else {
        let _ = writeln!(out, "\nBacklog / not right now");
        for row in backlog {
            let _ = writeln!(out, "{}", render_allocated(row));
        }
    }

    if let Some(view) = &report.heart_check {
        let _ = writeln!(out, "\nHeart check: {} ({})", view.label, view.summary);
    }

    if !report.advisories.is_empty() {
        let _ = writeln!(out, "\nNotes");
        for advisory in &report.advisories {
            let _ = writeln!(out, "- {}", advisory.message());
        }
    }

    let summary = &report.summary;
    let _ = writeln!(out, "\nRecommendation summary");
    let _ = writeln!(out, "- Give: about {}", format_currency(summary.give, 0));
    let _ = writeln!(
        out,
        "- Save/Invest: about {}",
        format_currency(summary.save, 0)
    );
    if !summary.buy_now.is_empty() {
        let _ = writeln!(
            out,
            "- Buy now (within your wants budget): {} (total about {})",
            summary.buy_now.join(", "),
            format_currency(summary.spent_now, 0)
        );
    }
    if let Some(unassigned) = summary.unassigned_wants {
        let _ = writeln!(
            out,
            "- You still have about {} of wants budget unassigned; you could save more or wait until you're clearer",
            format_currency(unassigned, 0)
        );
    }
    if !summary.backlog.is_empty() {
        let revisit = summary
            .revisit_on
            .map(|date| format!(" (revisit around {date})"))
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "- Backlog / wait list: {}{}",
            summary.backlog.join(", "),
            revisit
        );
    }

    out
}

fn render_allocated(row: &AllocatedOption) -> String {
    let cumulative = row
        .cumulative_spent
        .map(|spent| format!(" | cumulative {}", format_currency(spent, 2)))
        .unwrap_or_default();
    format!(
        "- #{} {} | cost {} | score {:.4} | {}{}",
        row.rank + 1,
        row.option.name,
        format_currency(row.option.cost, 2),
        row.option.score,
        row.decision.label(),
        cumulative
    )
}

fn category_suffix(category: &str) -> String {
    if category.is_empty() {
        String::new()
    } else {
        format!(" | {category}")
    }
}

/// Per-prompt weights behind the verdict, with the configured gates marked.
pub(crate) fn render_heart_check_breakdown(
    engine: &HeartCheckEngine,
    answers: &HeartCheckAnswers,
) -> String {
    let config = engine.config();
    let scores = engine.scores(answers);
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Heart check breakdown (clear yes at {:.1} of 4.0)",
        config.accept_threshold
    );
    for (dimension, weight) in scores.iter() {
        let gate = if config.gates.contains(&dimension) {
            " [gate]"
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "- {}: {} ({:.1}){}",
            dimension.label(),
            answers.answer(dimension).label(),
            weight,
            gate
        );
    }
    let _ = writeln!(out, "Total: {:.1}", scores.total());
    out
}

pub(crate) fn render_bucket_plan(plan: &BucketPlan) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Bucket plan for {} (raw percentages total {})",
        format_currency(plan.amount, 2),
        plan.raw_total
    );
    for row in &plan.rows {
        let _ = writeln!(
            out,
            "- {}: {:.1}% -> {}",
            row.label,
            row.normalized_percent * 100.0,
            format_currency(row.planned_amount, 2)
        );
    }
    let _ = writeln!(out, "Planned total: {}", format_currency(plan.planned_total(), 2));
    out
}

pub(crate) fn render_verse(cycle: VerseCycle) -> String {
    let verse = cycle.current();
    format!(
        "\"{}\"\n  - {} (next: --index {})\n",
        verse.text,
        verse.reference,
        cycle.next().index()
    )
}

/// Dollar amount with thousands separators, e.g. `$1,234.50`.
pub(crate) fn format_currency(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (whole, fraction) = match formatted.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (position, digit) in whole.chars().enumerate() {
        if position > 0 && (whole.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };

    match fraction {
        Some(fraction) => format!("{sign}${grouped}.{fraction}"),
        None => format!("{sign}${grouped}"),
    }
}
