//! Prints every demonstration as a labeled console section.

use crate::config::ShowcaseConfig;
use crate::error::Result;
use crate::parallel::{parallel_total_length, visit_parallel};
use crate::pipeline;
use crate::walkable::{double_stride_closure, walk_all, walk_with, DoubleStride};
use colored::Colorize;
use std::io::{self, Write};
use std::sync::Mutex;

pub struct Showcase<'a> {
    config: &'a ShowcaseConfig,
}

impl<'a> Showcase<'a> {
    pub fn new(config: &'a ShowcaseConfig) -> Self {
        Self { config }
    }

    pub fn run<W: Write + Send>(&self, out: &mut W) -> Result<()> {
        log::info!("Running showcase over {} fruits", self.config.fruits.len());

        self.write_walkers(out)?;
        self.write_pipelines(out)?;
        self.write_parallel(out)?;
        out.flush()?;

        log::info!("Showcase finished");
        Ok(())
    }

    fn write_walkers<W: Write>(&self, out: &mut W) -> Result<()> {
        let walk = &self.config.walk;

        let named = walk_with(&DoubleStride, walk.anonymous_steps, walk.enabled);
        writeln!(out, "{} {named}", "Named walker result:".bold())?;

        let closure = double_stride_closure();
        let from_closure = walk_with(&closure, walk.lambda_steps, walk.enabled);
        writeln!(out, "{} {from_closure}", "Closure walker result:".bold())?;

        let steps = [walk.anonymous_steps, walk.lambda_steps];
        let walked = walk_all(&closure, &steps, walk.enabled);
        writeln!(out, "{} {walked:?}", format!("Closure walker over {steps:?}:").as_str().bold())?;
        Ok(())
    }

    fn write_pipelines<W: Write>(&self, out: &mut W) -> Result<()> {
        let cfg = self.config;
        let fruits = &cfg.fruits;

        heading(out, &format!("Fruits with length > {} (sorted):", cfg.length_threshold))?;
        write_lines(out, &pipeline::filter_longer_sorted(fruits, cfg.length_threshold))?;

        let unique = pipeline::distinct(fruits);
        log::debug!("{} distinct of {} fruits", unique.len(), fruits.len());
        heading(out, "Unique fruits:")?;
        write_lines(out, &unique)?;

        heading(out, "Fruit lengths:")?;
        writeln!(out, "{:?}", pipeline::lengths(fruits))?;

        heading(out, "Fruit length map:")?;
        writeln!(out, "{:?}", pipeline::length_map(&unique))?;

        heading(out, "Total length of all fruits:")?;
        writeln!(out, "{}", pipeline::total_length(fruits))?;

        heading(out, "Total length, reduced in parallel:")?;
        writeln!(out, "{}", parallel_total_length(fruits))?;

        heading(out, &format!("First {} fruits:", cfg.take))?;
        write_lines(out, &pipeline::take_first(fruits, cfg.take))?;

        heading(out, &format!("Skip first {} fruits:", cfg.skip))?;
        write_lines(out, &pipeline::skip_first(fruits, cfg.skip))?;

        let groups = pipeline::group_by_length(fruits);
        log::debug!("{} length buckets", groups.len());
        heading(out, "Grouped by length:")?;
        writeln!(out, "{:?}", groups)?;

        heading(out, &format!("Partitioned by length > {}:", cfg.length_threshold))?;
        writeln!(out, "{}", pipeline::partition_by_length(fruits, cfg.length_threshold))?;

        heading(out, "Flattened fruit basket:")?;
        writeln!(out, "{:?}", pipeline::flatten(&cfg.basket))?;

        if let Some(longest) = pipeline::longest(fruits) {
            heading(out, &format!("Longest fruit: {longest}"))?;
        }

        heading(out, "Sorted by length descending:")?;
        write_lines(out, &pipeline::sort_by_length_desc(fruits))?;
        Ok(())
    }

    fn write_parallel<W: Write + Send>(&self, out: &mut W) -> Result<()> {
        heading(out, "Parallel iteration:")?;

        let sink = Mutex::new(&mut *out);
        visit_parallel(&self.config.fruits, |fruit| -> io::Result<()> {
            let mut guard = sink
                .lock()
                .map_err(|_| io::Error::other("report sink poisoned"))?;
            writeln!(guard, "{fruit}")
        })?;
        Ok(())
    }
}

fn heading<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", title.bold())
}

fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
