//! Content of a freshly scaffolded project.

use std::path::PathBuf;

use serde_json::{Map, Value, json};

use crate::domain::{
    entities::project_structure::ProjectStructure, registry::REGISTRY_PATH,
    registry::ServiceRegistry, render::RenderContext, value_objects::ProjectOptions,
};

/// Directories every scaffolded project starts with.
pub const BASE_DIRECTORIES: &[&str] = &[
    "src",
    "src/framework",
    "src/modules",
    "src/services",
    "src/middlewares",
    "src/configs",
];

/// Build the full initial tree for `options`, rooted at `root`.
pub fn project_structure(options: &ProjectOptions, root: impl Into<PathBuf>) -> ProjectStructure {
    let ctx = RenderContext::for_project(options.name().as_str())
        .with_variable("DESCRIPTION", options.description())
        .with_variable("AUTHOR", options.author());

    let mut structure = ProjectStructure::new(root);
    for dir in BASE_DIRECTORIES {
        structure.add_directory(*dir);
    }
    structure.add_directory("src/modules/example");

    structure.add_file("package.json", package_json(options));
    if options.typescript() {
        structure.add_file("tsconfig.json", tsconfig_json());
    }
    structure.add_file(".eslintrc.js", ESLINT_CONFIG);
    structure.add_file("README.md", readme(options, &ctx));
    structure.add_file(".gitignore", GITIGNORE);

    structure.add_file("src/framework/createController.ts", CREATE_CONTROLLER);
    structure.add_file("src/framework/loadRoutes.ts", LOAD_ROUTES);
    structure.add_file("src/index.ts", APP_ENTRY);
    structure.add_file(REGISTRY_PATH, ServiceRegistry::scaffold_default().render());

    structure.add_file("src/modules/example/input.ts", EXAMPLE_INPUT);
    structure.add_file("src/modules/example/output.ts", EXAMPLE_OUTPUT);
    structure.add_file("src/modules/example/useCase.ts", EXAMPLE_USE_CASE);
    structure.add_file("src/modules/example/index.ts", EXAMPLE_ROUTES);

    structure
}

/// `package.json`, two-space indented with a trailing newline.
pub fn package_json(options: &ProjectOptions) -> String {
    let mut scripts = Map::new();
    let mut dev_dependencies = Map::new();

    if options.typescript() {
        insert_all(
            &mut scripts,
            &[
                ("build", "tsc"),
                ("dev", "ts-node-dev --respawn --transpile-only src/index.ts"),
                ("start", "node dist/index.js"),
            ],
        );
        insert_all(
            &mut dev_dependencies,
            &[
                ("@types/express", "^4.17.21"),
                ("@types/cors", "^2.8.17"),
                ("@types/node", "^20.10.6"),
                ("ts-node-dev", "^2.0.0"),
                ("typescript", "^5.3.3"),
            ],
        );
    } else {
        insert_all(
            &mut scripts,
            &[("dev", "nodemon src/index.js"), ("start", "node src/index.js")],
        );
        insert_all(&mut dev_dependencies, &[("nodemon", "^3.0.2")]);
    }

    insert_all(
        &mut scripts,
        &[
            ("lint", "eslint src/**/*"),
            ("lint:fix", "eslint src/**/* --fix"),
            ("test", "echo \"Error: no test specified\" && exit 1"),
        ],
    );
    insert_all(
        &mut dev_dependencies,
        &[
            ("eslint", "^8.56.0"),
            ("@typescript-eslint/eslint-plugin", "^6.19.0"),
            ("@typescript-eslint/parser", "^6.19.0"),
        ],
    );

    let main = if options.typescript() {
        "dist/index.js"
    } else {
        "src/index.js"
    };

    let manifest = json!({
        "name": options.name().as_str(),
        "version": "1.0.0",
        "description": options.description(),
        "main": main,
        "scripts": scripts,
        "keywords": ["express", "api", "clean-architecture"],
        "author": options.author(),
        "license": "MIT",
        "dependencies": {
            "express": "^4.18.2",
            "cors": "^2.8.5",
            "helmet": "^7.1.0",
            "zod": "^3.22.4"
        },
        "devDependencies": dev_dependencies,
    });

    pretty(&manifest)
}

pub fn tsconfig_json() -> String {
    pretty(&json!({
        "compilerOptions": {
            "target": "ES2020",
            "module": "commonjs",
            "outDir": "./dist",
            "rootDir": "./src",
            "strict": true,
            "esModuleInterop": true,
            "skipLibCheck": true,
            "forceConsistentCasingInFileNames": true,
            "resolveJsonModule": true,
            "allowSyntheticDefaultImports": true
        },
        "include": ["src/**/*"],
        "exclude": ["node_modules", "dist"]
    }))
}

fn insert_all(map: &mut Map<String, Value>, pairs: &[(&str, &str)]) {
    for (key, value) in pairs {
        map.insert((*key).to_string(), Value::from(*value));
    }
}

// `{:#}` is serde_json's two-space pretty printer.
fn pretty(value: &Value) -> String {
    format!("{value:#}\n")
}

fn readme(options: &ProjectOptions, ctx: &RenderContext) -> String {
    let run = if options.typescript() {
        "npm run build\nnpm start"
    } else {
        "npm start"
    };
    ctx.clone().with_variable("RUN_COMMANDS", run).render(README)
}

const README: &str = r#"# {{PROJECT_NAME}}

{{DESCRIPTION}}

## Installation

```bash
npm install
```

## Development

```bash
npm run dev
```

## Production

```bash
{{RUN_COMMANDS}}
```

## Project Structure

This project follows a clean architecture pattern:

- `src/framework/` - Core framework utilities
- `src/modules/` - Business logic modules
- `src/services/` - Shared services, registered in `src/services/services.ts`
- `src/middlewares/` - Express middlewares
- `src/configs/` - Configuration files

## Usage

### Local Development

```typescript
import { createApp } from './src/index';

const app = createApp();
app.listen(3000, () => {
  console.log('Server running on port 3000');
});
```

### Serverless

```typescript
import { createApp } from './src/index';

export default createApp();
```

### Modules

Modules are loaded automatically. Each module's `index.ts` default-exports a
function that takes the Express app:

```typescript
// src/modules/auth/login/index.ts
import { Express } from 'express';

export default function loginRoutes(app: Express) {
  app.post('/api/auth/login', (req, res) => {
    // Route logic
  });
}
```

Add more with `expressos usecase auth login`, `expressos service mailer`
or `expressos middleware rate-limit`.

## API Endpoints

- `GET /api/health` - Health check
- `POST /api/example` - Example endpoint

## Author

{{AUTHOR}}

## License

MIT
"#;

const ESLINT_CONFIG: &str = r#"module.exports = {
  parser: '@typescript-eslint/parser',
  extends: [
    '@typescript-eslint/recommended',
  ],
  parserOptions: {
    ecmaVersion: 2020,
    sourceType: 'module',
  },
  rules: {
    '@typescript-eslint/no-unused-vars': 'error',
    '@typescript-eslint/explicit-function-return-type': 'off',
  },
};
"#;

const GITIGNORE: &str = "node_modules/
dist/
.env
.env.local
*.log
.DS_Store
coverage/
";

const CREATE_CONTROLLER: &str = r#"import { Request, Response } from "express";
import { ZodTypeAny } from "zod";
import { services } from "../services/services";

export function createValidatedController<TInput, TOutput>(
  useCase: (input: TInput, service: typeof services) => Promise<TOutput>,
  inputSchema: ZodTypeAny,
  outputSchema?: ZodTypeAny
) {
  return async (req: Request, res: Response) => {
    const parseResult = inputSchema.safeParse(req.body);

    if (!parseResult.success) {
      res
        .status(400)
        .json({ error: "Invalid input", details: parseResult.error.format() });
      return;
    }

    try {
      const result = await useCase(parseResult.data, services);

      if (outputSchema) {
        const out = outputSchema.safeParse(result);
        if (!out.success) {
          res
            .status(500)
            .json({ error: "Invalid output", details: out.error.format() });
          return;
        }
      }

      res.json(result);
    } catch (error) {
      res.status(500).json({ error: (error as Error).message });
    }
  };
}
"#;

const LOAD_ROUTES: &str = r#"import { Express } from 'express';
import fs from 'fs';
import path from 'path';

export function loadRoutes(app: Express): void {
  const modulesPath = path.join(__dirname, '..', 'modules');

  if (!fs.existsSync(modulesPath)) {
    return;
  }

  // Walk modules and sub-modules, registering every index that exports routes.
  function loadModuleRoutes(currentPath: string): void {
    const items = fs.readdirSync(currentPath);

    for (const item of items) {
      const itemPath = path.join(currentPath, item);
      const stat = fs.statSync(itemPath);

      if (stat.isDirectory()) {
        const indexPath = path.join(itemPath, 'index');
        try {
          const moduleRoutes = require(indexPath);
          if (moduleRoutes.default && typeof moduleRoutes.default === 'function') {
            moduleRoutes.default(app);
          }
        } catch (error) {
          // No index here: look one level deeper.
          loadModuleRoutes(itemPath);
        }
      }
    }
  }

  loadModuleRoutes(modulesPath);
}
"#;

const APP_ENTRY: &str = r#"import express from 'express';
import cors from 'cors';
import helmet from 'helmet';
import { loadRoutes } from './framework/loadRoutes';

export function createApp(): express.Express {
  const app = express();

  // Middlewares
  app.use(helmet());
  app.use(cors());
  app.use(express.json());

  // Health check
  app.get('/api/health', (req, res) => {
    res.json({ status: 'OK', timestamp: new Date().toISOString() });
  });

  // Load module routes
  loadRoutes(app);

  return app;
}

// Local execution
if (require.main === module) {
  const app = createApp();
  const PORT = process.env.PORT || 3000;

  app.listen(PORT, () => {
    console.log(`Server running on port ${PORT}`);
  });
}

export default createApp;
"#;

const EXAMPLE_INPUT: &str = r#"import { z } from 'zod';

export const ExampleInput = z.object({
  message: z.string().min(1)
});

export type ExampleInputType = z.infer<typeof ExampleInput>;
"#;

const EXAMPLE_OUTPUT: &str = r#"import { z } from 'zod';

export const ExampleOutput = z.object({
  success: z.boolean(),
  message: z.string(),
  timestamp: z.string()
});

export type ExampleOutputType = z.infer<typeof ExampleOutput>;
"#;

const EXAMPLE_USE_CASE: &str = r#"import { Services } from '../../services/services';
import { ExampleInputType } from './input';
import { ExampleOutputType } from './output';

export async function exampleUseCase(
  input: ExampleInputType,
  services: Services
): Promise<ExampleOutputType> {
  services.logger.info(`Processing example: ${input.message}`);

  return {
    success: true,
    message: `Hello, ${input.message}!`,
    timestamp: new Date().toISOString()
  };
}
"#;

const EXAMPLE_ROUTES: &str = r#"import { Express } from 'express';
import { createValidatedController } from '../../framework/createController';
import { ExampleInput } from './input';
import { ExampleOutput } from './output';
import { exampleUseCase } from './useCase';

export default function exampleRoutes(app: Express) {
  app.post('/api/example',
    createValidatedController(exampleUseCase, ExampleInput, ExampleOutput)
  );
}
"#;
