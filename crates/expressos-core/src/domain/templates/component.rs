//! Content of generated components.

use std::path::{Path, PathBuf};

use crate::domain::{
    entities::{
        component::{DerivedNames, SymbolNames},
        project_structure::ProjectStructure,
    },
    render::RenderContext,
};

/// The four files of a use case (or module), under `names.module_path`.
pub fn use_case_structure(root: impl Into<PathBuf>, names: &DerivedNames) -> ProjectStructure {
    let ctx = RenderContext::empty()
        .with_variable("PASCAL_NAME", &names.pascal_name)
        .with_variable("CAMEL_NAME", &names.camel_name)
        .with_variable("ROUTE", names.route())
        .with_variable("ROOT", names.relative_root());

    let dir = names.module_path.as_path();
    ProjectStructure::new(root)
        .with_directory(dir)
        .with_file(dir.join("input.ts"), ctx.render(USE_CASE_INPUT))
        .with_file(dir.join("output.ts"), ctx.render(USE_CASE_OUTPUT))
        .with_file(dir.join("useCase.ts"), ctx.render(USE_CASE))
        .with_file(dir.join("index.ts"), ctx.render(USE_CASE_ROUTES))
}

/// `<dir>/<camel>.ts` with the service interface, class and singleton.
pub fn service_structure(
    root: impl Into<PathBuf>,
    dir: &Path,
    names: &SymbolNames,
) -> ProjectStructure {
    single_file(root, dir, names, SERVICE)
}

/// `<dir>/<camel>.ts` with a configurable middleware factory.
pub fn middleware_structure(
    root: impl Into<PathBuf>,
    dir: &Path,
    names: &SymbolNames,
) -> ProjectStructure {
    single_file(root, dir, names, MIDDLEWARE)
}

fn single_file(
    root: impl Into<PathBuf>,
    dir: &Path,
    names: &SymbolNames,
    template: &str,
) -> ProjectStructure {
    let ctx = RenderContext::empty()
        .with_variable("PASCAL_NAME", &names.pascal_name)
        .with_variable("CAMEL_NAME", &names.camel_name);

    ProjectStructure::new(root)
        .with_directory(dir)
        .with_file(
            dir.join(format!("{}.ts", names.camel_name)),
            ctx.render(template),
        )
}

const USE_CASE_INPUT: &str = r#"import { z } from 'zod';

export const {{PASCAL_NAME}}Input = z.object({
  // TODO: define the input fields
  id: z.string().min(1)
});

export type {{PASCAL_NAME}}InputType = z.infer<typeof {{PASCAL_NAME}}Input>;
"#;

const USE_CASE_OUTPUT: &str = r#"import { z } from 'zod';

export const {{PASCAL_NAME}}Output = z.object({
  // TODO: define the output fields
  success: z.boolean(),
  message: z.string()
});

export type {{PASCAL_NAME}}OutputType = z.infer<typeof {{PASCAL_NAME}}Output>;
"#;

const USE_CASE: &str = r#"import { Services } from '{{ROOT}}services/services';
import { {{PASCAL_NAME}}InputType } from './input';
import { {{PASCAL_NAME}}OutputType } from './output';

export async function {{CAMEL_NAME}}UseCase(
  input: {{PASCAL_NAME}}InputType,
  services: Services
): Promise<{{PASCAL_NAME}}OutputType> {
  // TODO: implement the business logic
  services.logger.info(`Processing {{CAMEL_NAME}}: ${input.id}`);

  return {
    success: true,
    message: `{{PASCAL_NAME}} executed successfully`
  };
}
"#;

const USE_CASE_ROUTES: &str = r#"import { Express } from 'express';
import { createValidatedController } from '{{ROOT}}framework/createController';
import { {{PASCAL_NAME}}Input } from './input';
import { {{PASCAL_NAME}}Output } from './output';
import { {{CAMEL_NAME}}UseCase } from './useCase';

export default function {{CAMEL_NAME}}Routes(app: Express) {
  app.post('{{ROUTE}}',
    createValidatedController({{CAMEL_NAME}}UseCase, {{PASCAL_NAME}}Input, {{PASCAL_NAME}}Output)
  );

  // app.get('{{ROUTE}}/:id', ...)
  // app.put('{{ROUTE}}/:id', ...)
  // app.delete('{{ROUTE}}/:id', ...)
}
"#;

const SERVICE: &str = r#"export interface I{{PASCAL_NAME}}Service {
  get(id: string): Promise<any>;
  create(data: any): Promise<any>;
  update(id: string, data: any): Promise<any>;
  delete(id: string): Promise<boolean>;
}

export class {{PASCAL_NAME}}Service implements I{{PASCAL_NAME}}Service {
  async get(id: string): Promise<any> {
    throw new Error('Method not implemented');
  }

  async create(data: any): Promise<any> {
    throw new Error('Method not implemented');
  }

  async update(id: string, data: any): Promise<any> {
    throw new Error('Method not implemented');
  }

  async delete(id: string): Promise<boolean> {
    throw new Error('Method not implemented');
  }
}

export const {{CAMEL_NAME}}Service = new {{PASCAL_NAME}}Service();
"#;

const MIDDLEWARE: &str = r#"import { Request, Response, NextFunction } from 'express';

export interface {{PASCAL_NAME}}Options {
  enabled?: boolean;
}

export function {{CAMEL_NAME}}(options: {{PASCAL_NAME}}Options = {}) {
  return (req: Request, res: Response, next: NextFunction) => {
    if (!options.enabled) {
      return next();
    }

    console.log(`{{PASCAL_NAME}} middleware executed for ${req.method} ${req.path}`);

    next();
  };
}

export default {{CAMEL_NAME}};
"#;
