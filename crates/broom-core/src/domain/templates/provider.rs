pub const MAIN: &str = r#"import 'package:flutter/material.dart';
import 'package:flutter_easyloading/flutter_easyloading.dart';
import 'package:provider/provider.dart';
import 'presentation/routes/app_providers.dart';
import 'presentation/routes/app_routes.dart';
import 'presentation/routes/app_routes_provider.dart';

final GlobalKey<NavigatorState> navigatorKey = GlobalKey<NavigatorState>();

void main() {
  runApp(
    MultiProvider(
      providers: AppProviders.getProviders(),
      child: const MyApp(),
    ),
  );
}

class MyApp extends StatelessWidget {
  const MyApp({super.key});

  @override
  Widget build(BuildContext context) {
    return MaterialApp(
      title: 'My App',
      theme: ThemeData.light(),
      debugShowCheckedModeBanner: false,
      initialRoute: AppRoutes.home,
      routes: AppRoutesProvider.getRoutes(),
      navigatorKey: navigatorKey,
      builder: EasyLoading.init(),
    );
  }
}
"#;

pub const APP_PROVIDERS: &str = r#"import 'package:provider/provider.dart';
import 'package:provider/single_child_widget.dart';

class AppProviders {
  static List<SingleChildWidget> getProviders() {
    return [
      // {{stateClassName}} list
    ];
  }
}
"#;

pub const PROVIDER: &str = r#"import 'package:flutter/material.dart';
import '../../data/datasource/network/service/{{featureName}}_service.dart';

class {{pascalName}}Provider with ChangeNotifier {
  late BuildContext context;
  {{pascalName}}Service {{camelName}}Service = {{pascalName}}Service();
  int _count = 0;

  int get count => _count;

  void incrementCount() {
    _count++;
    notifyListeners();
  }
}
"#;

pub const PAGE: &str = r#"import 'package:flutter/material.dart';
import 'package:provider/provider.dart';

import '../../providers/{{featureName}}_provider.dart';

class {{pascalName}}Page extends StatelessWidget {
  const {{pascalName}}Page({super.key});

  @override
  Widget build(BuildContext context) {
    final provider = Provider.of<{{pascalName}}Provider>(context);
    provider.context = context;

    return Scaffold(
      appBar: AppBar(
        title: const Text("{{pascalName}} Page"),
      ),
      body: Center(
        child: Column(
          mainAxisAlignment: MainAxisAlignment.center,
          children: [
            Text('Count: ${provider.count}', style: const TextStyle(fontSize: 24)),
            const SizedBox(height: 16),
            ElevatedButton(
              onPressed: provider.incrementCount,
              child: const Text('Increment Count'),
            ),
          ],
        ),
      ),
    );
  }
}
"#;

pub const DI_ENTRY: &str = "      ChangeNotifierProvider(create: (_) => {{pascalName}}Provider()),";
pub const PROVIDER_IMPORT: &str = "import '../providers/{{snakeName}}_provider.dart';";
