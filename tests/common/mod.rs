use lesson::mach::{Event, Runtime};

pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 100)
}

pub fn exec_n(runtime: &mut Runtime, events: usize) -> String {
    let mut s = String::new();
    for _ in 0..events {
        match runtime.execute() {
            Event::Stopped => break,
            Event::Errors(errors) => {
                for error in errors.iter() {
                    s.push_str(&format!("{}\n", error));
                }
            }
            Event::Print(ps) => s.push_str(&ps),
            Event::Input(ps) => {
                s.push_str(&ps);
                break;
            }
        }
    }
    s
}
