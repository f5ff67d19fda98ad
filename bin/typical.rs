/*
MIT License
Copyright (c)  Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

use clap::Parser;
use typical::model::{print_error, Model};
use typical::{CreateTypical, MeasureOptions, RunReport, StandardsGenerator};

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let options = MeasureOptions::parse();

    let mut model = match Model::from_json_file(options.input_file.to_string()) {
        Ok(o) => o,
        Err(e) => {
            print_error("", e);
            std::process::exit(1);
        }
    };

    let output = options.output.clone();
    let measure = CreateTypical::new(options);
    let mut report = RunReport::new();
    if !measure.run(&mut model, &StandardsGenerator, &mut report) {
        std::process::exit(1);
    }

    let written = match &output {
        Some(path) => model.save_json(path),
        None => model.to_json().map(|json| println!("{}", json)),
    };
    if let Err(e) = written {
        print_error("", e);
        std::process::exit(1);
    }
}
