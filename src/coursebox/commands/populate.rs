use crate::commands::{CmdContext, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Kind, Module};
use crate::store::DataStore;

struct Sample {
    code: &'static str,
    name: &'static str,
    lines: &'static [(Kind, &'static [&'static str])],
}

const SAMPLES: &[Sample] = &[
    Sample {
        code: "CG1111",
        name: "Engineering Principles and Practice I",
        lines: &[
            (
                Kind::Task,
                &[
                    "D | 0 | Lab report 4 | 15/10/2019 23:59",
                    "LAB | 0 | Lab 5 | 17/10/2019 14:00 | 17/10/2019 17:00",
                    "T | 1 | Read chapter 3",
                ],
            ),
            (Kind::File, &["F | 1 | Week 8 slides.pdf", "F | 0 | Lab 5 manual.pdf"]),
            (Kind::Grade, &["G | Final exam | 40", "G | Quiz 1 | 10 | 8 | 10"]),
            (Kind::Note, &["N | Bring the lab kit on Thursday"]),
        ],
    },
    Sample {
        code: "CS2113T",
        name: "Software Engineering and Object-Oriented Programming",
        lines: &[
            (
                Kind::Task,
                &[
                    "EXAM | 0 | Final exam | 30/11/2019 13:00 | 30/11/2019 15:00",
                    "T | 0 | Update the developer guide",
                ],
            ),
            (Kind::File, &["F | 0 | Coding standard.pdf"]),
            (Kind::Grade, &["G | Project | 50"]),
        ],
    },
    Sample {
        code: "CS2101",
        name: "Effective Communication for Computing Professionals",
        lines: &[
            (
                Kind::Task,
                &["TUT | 0 | Tutorial 9 | 21/10/2019 10:00 | 21/10/2019 12:00"],
            ),
            (Kind::Note, &["N | Oral presentation slides due in week 11"]),
        ],
    },
];

fn build(sample: &Sample) -> Result<Module> {
    let mut module = Module::new(sample.code, sample.name);
    for (kind, lines) in sample.lines {
        let lines: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        module.load(*kind, &lines)?;
    }
    Ok(module)
}

/// Adds the sample modules. Codes that already exist are left alone.
pub fn run<S: DataStore>(ctx: &mut CmdContext<'_, S>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut added = 0;

    for sample in SAMPLES {
        if ctx.registry.contains(sample.code) {
            result.add_message(CmdMessage::info(format!(
                "Skipped {}: it already exists.",
                sample.code
            )));
            continue;
        }
        ctx.registry.insert(build(sample)?)?;
        ctx.registry.save_module(ctx.store, sample.code)?;
        added += 1;
    }

    if added > 0 {
        ctx.registry.save_index(ctx.store)?;
    }
    tracing::info!(added, "populated sample modules");
    result.add_message(CmdMessage::success(format!(
        "Added {} sample module{}.",
        added,
        if added == 1 { "" } else { "s" }
    )));
    Ok(result)
}
